//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization and
//! a `create_*` convenience function for quick default creation. Factories that need a
//! parent row take its id, so create owners before pets and pets/doctors before visits
//! (or use the helpers).
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_owner(&db).await?;
//! let pet = factory::pet::PetFactory::new(&db, owner.id)
//!     .name("Barsik")
//!     .species("Cat")
//!     .build()
//!     .await?;
//!
//! let (owner, pet, doctor, visit) = factory::helpers::create_visit_with_dependencies(&db).await?;
//! ```

pub mod doctor;
pub mod helpers;
pub mod owner;
pub mod pet;
pub mod service;
pub mod visit;

// Re-export commonly used factory functions for concise usage
pub use doctor::create_doctor;
pub use owner::create_owner;
pub use pet::create_pet;
pub use service::create_service;
pub use visit::create_visit;
