use thiserror::Error;

/// Failure to obtain a database handle from the connection provider.
///
/// Covers an unreachable server, rejected credentials, and driver-level failures while
/// opening the connection. Surfaced to clients as a 500 with a generic message; the
/// underlying cause is only logged.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Failed to open database connection: {0}")]
    Connect(#[source] sea_orm::DbErr),
}
