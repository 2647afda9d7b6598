//! SeaORM entity definitions for the clinic database.
//!
//! The schema is owned by the database and must already exist. Column names keep the
//! database's PascalCase spelling (`DoctorID`, `FullName`, ...) so they can be exposed
//! unchanged on the wire.

pub mod prelude;

pub mod doctor;
pub mod owner;
pub mod pet;
pub mod service;
pub mod visit;
