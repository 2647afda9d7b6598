//! Request parsing helpers shared by the controllers.
//!
//! - `payload` turns a raw request body into an optional JSON object
//! - `validate` checks presence of required fields
//! - `coerce` converts individual field values into column types
//! - `parse` extracts row ids from request paths

pub mod coerce;
pub mod parse;
pub mod payload;
pub mod validate;
