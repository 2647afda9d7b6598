use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{connection::ConnectionProvider, router, state::AppState};


/// Serves the API routes against an existing test database.
fn test_server(db: &DatabaseConnection) -> TestServer {
    let state = AppState::new(ConnectionProvider::shared(db.clone()));

    TestServer::new(router::router().with_state(state)).unwrap()
}
