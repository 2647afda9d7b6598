//! Service layer between the controllers and the repositories.
//!
//! Every operation acquires a database handle from the `ConnectionProvider`, runs exactly
//! one repository call and releases the handle again before inspecting the result, so a
//! failing statement never leaks a per-request connection. Services return domain models;
//! controllers convert them to DTOs.

pub mod catalog;
pub mod doctor;
pub mod owner;
pub mod pet;
pub mod visit;
