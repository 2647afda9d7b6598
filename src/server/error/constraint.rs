use thiserror::Error;

/// A write rejected by a database-level constraint.
///
/// The message is the driver's own text, passed through un-translated.
#[derive(Error, Debug)]
pub enum ConstraintError {
    /// Referenced row does not exist (e.g. a pet's `OwnerID`) or is still referenced.
    #[error("{0}")]
    ForeignKey(String),

    /// Duplicate value in a unique column or primary key.
    #[error("{0}")]
    Unique(String),
}
