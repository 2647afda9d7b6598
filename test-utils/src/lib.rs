//! Clinic Test Utils
//!
//! Provides shared testing utilities for the clinic backend. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases whose tables are
//! generated from the SeaORM entities, plus factories for inserting rows with sensible
//! defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for owners, doctors, pets, services and visits
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_doctors() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let doctor = factory::create_doctor(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
