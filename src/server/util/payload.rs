use serde_json::{Map, Value};

use crate::server::error::validation::ValidationError;

/// A request body decoded as a JSON object, keyed by column name.
pub type Payload = Map<String, Value>;

/// Decodes a raw request body.
///
/// An empty (or whitespace-only) body and a literal `null` both mean "no payload" and
/// yield `Ok(None)`, leaving the decision to the validator. Anything that is not a JSON
/// object is rejected.
///
/// # Returns
/// - `Ok(Some(Payload))` - Body is a JSON object
/// - `Ok(None)` - Body is absent or `null`
/// - `Err(ValidationError::MalformedPayload)` - Invalid JSON or a non-object value
pub fn parse_payload(body: &[u8]) -> Result<Option<Payload>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Ok(None),
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(other) => Err(ValidationError::MalformedPayload(format!(
            "found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ValidationError::MalformedPayload(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
