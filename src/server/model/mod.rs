//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into the domain models defined here so entity
//! types never leak past the data layer. Parameter types are built from request payloads:
//! `from_payload` runs required-field validation first and then coerces each field into
//! its column type, so every validation failure is reported before a connection is opened.

pub mod doctor;
pub mod owner;
pub mod pet;
pub mod service;
pub mod visit;
