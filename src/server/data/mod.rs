//! Database repository layer for the clinic tables.
//!
//! Each repository borrows a connection for the duration of one operation and performs
//! a single statement against its table. Repositories use SeaORM entity models internally
//! and return domain models from `server::model`, keeping entity types out of the service
//! and controller layers.
//!
//! Updates and deletes report the number of affected rows instead of failing when the id
//! does not exist; callers decide what a zero count means.

pub mod doctor;
pub mod owner;
pub mod pet;
pub mod service;
pub mod visit;

#[cfg(test)]
mod test;
