//! Field format predicates.
//!
//! Pure checks over a single raw field value. Both the live feedback
//! presenters and the commit-time checks of the contact book call these, so a
//! value accepted while typing is accepted on submit and vice versa.

use once_cell::sync::Lazy;
use regex::Regex;

// Anchored at the start only: anything may follow a well-formed prefix
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static FIRST_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{3,}$").unwrap());

static LAST_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

/// Validate an email address.
///
/// # Rules
///
/// - A non-empty local part followed by `@`
/// - A domain made of two non-empty segments joined by a dot
/// - Only that prefix is checked; trailing text is not
///
/// # Examples
///
/// ```
/// use contact_book::validation::input::is_valid_email;
///
/// assert!(is_valid_email("a@b.c"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("@b.c"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a phone number.
///
/// Exactly ten ASCII digits, and not the same digit repeated ten times.
///
/// ```
/// use contact_book::validation::input::is_valid_phone;
///
/// assert!(is_valid_phone("1234567890"));
/// assert!(!is_valid_phone("1111111111"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    if !PHONE_REGEX.is_match(phone) {
        return false;
    }
    let mut digits = phone.bytes();
    match digits.next() {
        Some(first) => digits.any(|d| d != first),
        None => false,
    }
}

/// Validate a first name: ASCII letters only, at least three of them.
pub fn is_valid_name(name: &str) -> bool {
    FIRST_NAME_REGEX.is_match(name)
}

/// Validate a last name: ASCII letters only, no minimum beyond one.
pub fn is_valid_last_name(name: &str) -> bool {
    LAST_NAME_REGEX.is_match(name)
}
