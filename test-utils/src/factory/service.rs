//! Service factory for creating test clinic service entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clinic services with customizable fields.
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    service_name: String,
    cost: f64,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - service_name: `"Service {id}"`
    /// - cost: `5000.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            service_name: format!("Service {}", id),
            cost: 5000.0,
        }
    }

    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Builds and inserts the service entity into the database.
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            id: ActiveValue::NotSet,
            service_name: ActiveValue::Set(self.service_name),
            cost: ActiveValue::Set(self.cost),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clinic service with default values.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db).build().await
}
