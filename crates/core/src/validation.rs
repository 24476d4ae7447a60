//! Input normalization and validator-to-domain error mapping.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Trim a possibly-absent text field. Absent and whitespace-only values
/// both normalize to the empty string so a single `length(min = 1)` rule
/// covers "missing" and "blank".
pub fn normalize(value: Option<String>) -> String {
    match value {
        Some(v) => v.trim().to_string(),
        None => String::new(),
    }
}

/// Run the derived validation rules for `input`, mapping failures to
/// [`CoreError::Validation`].
pub fn check<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten validator errors into one human-readable sentence.
///
/// Field errors are ordered by field name so the message is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    if messages.is_empty() {
        "Invalid input".to_string()
    } else {
        messages.join("; ")
    }
}
