pub use super::doctor::Entity as Doctor;
pub use super::owner::Entity as Owner;
pub use super::pet::Entity as Pet;
pub use super::service::Entity as Service;
pub use super::visit::Entity as Visit;
