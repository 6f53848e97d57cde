//! Models module
//!
//! Defines the contact record as persisted and the raw field set callers submit.

pub mod contact;

pub use contact::{Contact, ContactFields, ContactId};
