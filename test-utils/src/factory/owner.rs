//! Owner factory for creating test owner entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test owners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let owner = OwnerFactory::new(&db)
///     .full_name("Ivan Petrov")
///     .email(None)
///     .build()
///     .await?;
/// ```
pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
}

impl<'a> OwnerFactory<'a> {
    /// Creates a new OwnerFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Owner {id}"`
    /// - phone: `"+7 700 000 {id}"`
    /// - email: `"owner{id}@example.com"`
    /// - address: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Owner {}", id),
            phone: Some(format!("+7 700 000 {}", id)),
            email: Some(format!("owner{}@example.com", id)),
            address: None,
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Builds and inserts the owner entity into the database.
    pub async fn build(self) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            id: ActiveValue::NotSet,
            full_name: ActiveValue::Set(self.full_name),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            address: ActiveValue::Set(self.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner with default values.
///
/// Shorthand for `OwnerFactory::new(db).build().await`.
pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db).build().await
}
