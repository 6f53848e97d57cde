//! Check command implementation

use crate::validation::{Feedback, FieldKind, FieldStatus, validate_field};

/// Handle the `check` command: live feedback for one field value.
///
/// Returns the status string and whether the value is acceptable.
pub fn handle_check(field: FieldKind, value: &str, feedback: Feedback) -> (String, bool) {
    let status = validate_field(field, value, feedback);
    let accepted = matches!(status, FieldStatus::Valid | FieldStatus::Skipped);
    (status.to_string(), accepted)
}
