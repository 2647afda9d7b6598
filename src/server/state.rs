//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds only the connection provider; handlers acquire a
//! database handle from it per operation.

use crate::server::connection::ConnectionProvider;

#[derive(Clone)]
pub struct AppState {
    pub connections: ConnectionProvider,
}

impl AppState {
    pub fn new(connections: ConnectionProvider) -> Self {
        Self { connections }
    }
}
