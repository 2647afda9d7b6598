use serde_json::Value;

use crate::server::{error::validation::ValidationError, util::payload::Payload};

/// Checks that a payload exists and carries every required field.
///
/// A field counts as missing when it is absent, `null`, or a string that is empty after
/// trimming. Type checks are left to `coerce`.
///
/// # Arguments
/// - `payload` - Decoded request body, `None` when the body was empty
/// - `required` - Column names that must be present
///
/// # Returns
/// - `Ok(&Payload)` - The payload, for chaining into coercion
/// - `Err(ValidationError::MissingPayload)` - No body was sent
/// - `Err(ValidationError::MissingFields)` - One or more fields are missing, listed in
///   the order of `required`
pub fn validate_required<'a>(
    payload: Option<&'a Payload>,
    required: &[&str],
) -> Result<&'a Payload, ValidationError> {
    let payload = payload.ok_or(ValidationError::MissingPayload)?;

    let missing: Vec<String> = required
        .iter()
        .filter(|field| is_blank(payload.get(**field)))
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(payload)
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
