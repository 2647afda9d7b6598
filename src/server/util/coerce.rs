//! Field coercion from JSON values to column types.
//!
//! Values arrive from loosely-typed front-ends: numbers may be sent as strings and text
//! inputs may be sent as numbers. Each function accepts the reasonable encodings of its
//! type and reports anything else as a `ValidationError` naming the field.

use chrono::NaiveDate;
use serde_json::Value;

use crate::server::{error::validation::ValidationError, util::payload::Payload};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads a required text column.
///
/// Strings are taken verbatim, numbers and booleans are stringified.
pub fn text(payload: &Payload, field: &str) -> Result<String, ValidationError> {
    optional_text(payload, field)?.ok_or_else(|| missing(field))
}

/// Reads a nullable text column; absent and `null` both yield `None`.
pub fn optional_text(payload: &Payload, field: &str) -> Result<Option<String>, ValidationError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(_) => Err(ValidationError::NotText(field.to_string())),
    }
}

/// Reads a required integer column.
///
/// Accepts JSON integers, floats without a fractional part, and strings holding an
/// integer.
pub fn integer(payload: &Payload, field: &str) -> Result<i32, ValidationError> {
    let not_an_integer = || ValidationError::NotAnInteger(field.to_string());

    match payload.get(field) {
        None | Some(Value::Null) => Err(missing(field)),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(not_an_integer),
        Some(Value::String(s)) => s.trim().parse::<i32>().map_err(|_| not_an_integer()),
        Some(_) => Err(not_an_integer()),
    }
}

/// Reads a required integer column that must be zero or greater.
///
pub fn non_negative_integer(payload: &Payload, field: &str) -> Result<i32, ValidationError> {
    let value = integer(payload, field)?;

    if value < 0 {
        return Err(ValidationError::NegativeNumber(field.to_string()));
    }

    Ok(value)
}

/// Reads a required decimal column from a JSON number or numeric string.
pub fn number(payload: &Payload, field: &str) -> Result<f64, ValidationError> {
    let not_a_number = || ValidationError::NotANumber(field.to_string());

    let value = match payload.get(field) {
        None | Some(Value::Null) => return Err(missing(field)),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(not_a_number)?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| not_a_number())?,
        Some(_) => return Err(not_a_number()),
    };

    if !value.is_finite() {
        return Err(not_a_number());
    }

    Ok(value)
}

/// Reads a required decimal column that must be zero or greater.
pub fn non_negative_number(payload: &Payload, field: &str) -> Result<f64, ValidationError> {
    let value = number(payload, field)?;

    if value < 0.0 {
        return Err(ValidationError::NegativeNumber(field.to_string()));
    }

    Ok(value)
}

/// Reads a nullable `YYYY-MM-DD` date column.
///
/// Absent, `null` and blank strings yield `None`.
pub fn optional_date(payload: &Payload, field: &str) -> Result<Option<NaiveDate>, ValidationError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::InvalidDate(field.to_string())),
        Some(_) => Err(ValidationError::InvalidDate(field.to_string())),
    }
}

fn missing(field: &str) -> ValidationError {
    ValidationError::MissingFields(vec![field.to_string()])
}
