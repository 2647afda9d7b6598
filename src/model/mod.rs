//! Wire-level data transfer objects.
//!
//! Response DTOs serialize with the database's column names and keep table column order.
//! Payload DTOs document the request bodies; handlers parse bodies leniently (see
//! `server::util`) so these types are used for API documentation and by tests.

pub mod api;
pub mod doctor;
pub mod owner;
pub mod pet;
pub mod service;
pub mod visit;
