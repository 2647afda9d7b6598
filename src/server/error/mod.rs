//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. Each variant
//! corresponds to one class of failure and is mapped explicitly to a status code:
//!
//! - `ValidationErr` → 400 with a message naming the offending field(s)
//! - `ConnectionErr` → 500 with a generic message, cause logged server-side
//! - `ConstraintErr` / `DbErr` → 500 with the database driver's message
//! - `ConfigErr` / `IoErr` → startup failures, 500 if they ever reach a handler
//!
//! Every response body uses the `{ "success": false, "error": ... }` envelope.

pub mod config;
pub mod connection;
pub mod constraint;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, connection::ConnectionError, constraint::ConstraintError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The connection provider could not hand out a database handle.
    #[error(transparent)]
    ConnectionErr(#[from] ConnectionError),

    /// Missing, blank or uncoercible request input.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Write rejected by a foreign key or uniqueness constraint.
    #[error(transparent)]
    ConstraintErr(#[from] ConstraintError),

    /// Any other database error from SeaORM.
    #[error(transparent)]
    DbErr(DbErr),

    /// Socket or filesystem error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Classifies database errors so constraint violations and lost connections get their
/// own variants.
///
/// Violations are detected with SeaORM's backend-aware `sql_err()`. A pooled connection
/// that cannot be acquired is reported like any other connection failure.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if matches!(err, DbErr::ConnectionAcquire(_) | DbErr::Conn(_)) {
            return AppError::ConnectionErr(ConnectionError::Connect(err));
        }

        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::ConstraintErr(ConstraintError::ForeignKey(err.to_string()))
            }
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::ConstraintErr(ConstraintError::Unique(err.to_string()))
            }
            _ => AppError::DbErr(err),
        }
    }
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationErr(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr`, with the validation message
/// - 500 Internal Server Error - For `ConnectionErr`, with a generic message
/// - 500 Internal Server Error - For `ConstraintErr` and `DbErr`, with the driver message
/// - 500 Internal Server Error - For startup-only variants, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::ValidationErr(err) => {
                tracing::debug!("Rejected request: {}", err);
                (status, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            Self::ConnectionErr(err) => {
                tracing::error!("{}", err);
                (
                    status,
                    Json(ErrorDto::new("Database connection unavailable")),
                )
                    .into_response()
            }
            Self::ConstraintErr(err) => {
                tracing::warn!("Constraint violation: {}", err);
                (status, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (status, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
