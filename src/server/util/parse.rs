use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::{validation::ValidationError, AppError};

/// Extracts a primary key from the request path.
///
/// Handlers take the path extractor as a `Result` so a non-integer id is reported in
/// the standard error envelope rather than axum's plain-text rejection.
///
/// # Arguments
/// - `path` - Result of the `Path<i32>` extractor
///
/// # Returns
/// - `Ok(i32)` - The row id
/// - `Err(AppError::ValidationErr(InvalidPathId))` - The segment is not an `i32`
pub fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    let Path(id) = path.map_err(|rejection| ValidationError::InvalidPathId(rejection.body_text()))?;

    Ok(id)
}
