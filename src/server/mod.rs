//! HTTP backend for the clinic application.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, payload parsing and DTO conversion
//! - **Service Layer** (`service/`) - Connection acquire/release around each repository call
//! - **Data Layer** (`data/`) - Database statements and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Utilities** (`util/`) - Payload parsing, required-field checks and value coercion
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Connection** (`connection`) - Per-request or pooled database handles
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, connection provider and application assembly
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the method and path, or falls through to the static front-end
//! 2. **Controller** parses the id and body, builds a parameter, calls the service
//! 3. **Service** acquires a connection, runs the repository call, releases the connection
//! 4. **Data** executes one statement and converts entities to domain models
//! 5. **Controller** converts the result to a DTO inside the `{ success, ... }` envelope

pub mod config;
pub mod connection;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
