//! Validation functionality
//!
//! Provides validation logic for:
//! - Field format predicates (names, email, phone)
//! - Live per-field feedback for form front ends

pub mod fields;
pub mod input;

pub use fields::{
    Feedback, FieldKind, FieldStatus, validate_address, validate_email, validate_field,
    validate_first_name, validate_last_name, validate_phone,
};
pub use input::{is_valid_email, is_valid_last_name, is_valid_name, is_valid_phone};
