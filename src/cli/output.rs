//! Output formatting for CLI

use crate::book::SubmitOutcome;
use crate::cli::error::CliError;
use crate::models::{Contact, ContactFields};

/// Echo the submitted fields so a rejected form can be corrected and resent
pub fn format_echoed_fields(fields: &ContactFields) -> String {
    let rows = [
        ("first_name", &fields.first_name),
        ("middle_name", &fields.middle_name),
        ("last_name", &fields.last_name),
        ("address", &fields.address),
        ("email", &fields.email),
        ("phone", &fields.phone),
    ];

    let mut output = String::from("Submitted:\n");
    for (name, value) in rows {
        output.push_str(&format!("  {:<12} {}\n", format!("{}:", name), value));
    }
    output
}

/// Format the result of a create or update for display
pub fn format_submit_outcome(outcome: &SubmitOutcome) -> String {
    if outcome.is_success() {
        outcome.message.clone()
    } else {
        format!("{}\n{}", outcome.message, format_echoed_fields(&outcome.fields))
    }
}

/// One contact as pretty JSON
pub fn format_contact_json(contact: &Contact) -> Result<String, CliError> {
    serde_json::to_string_pretty(contact).map_err(|e| CliError::Output(e.to_string()))
}
