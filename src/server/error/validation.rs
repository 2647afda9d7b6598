use thiserror::Error;

/// Client input problems detected before any statement reaches the database.
///
/// Every variant maps to 400 Bad Request with the display text as the error message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No request body, an empty body or a JSON `null`.
    #[error("Request body is empty")]
    MissingPayload,

    /// Body is not valid JSON or is not a JSON object.
    #[error("Request body must be a JSON object: {0}")]
    MalformedPayload(String),

    /// Required fields that are absent, `null` or blank, in declaration order.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{0} must be an integer")]
    NotAnInteger(String),

    #[error("{0} must be a number")]
    NotANumber(String),

    /// Value failed to parse as a number or parsed to a negative one.
    #[error("{0} must be a non-negative number")]
    NegativeNumber(String),

    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("{0} must be a text value")]
    NotText(String),

    /// Path segment that should identify a row is not an integer.
    #[error("Invalid id in request path: {0}")]
    InvalidPathId(String),
}
