//! Doctor factory for creating test doctor entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test doctors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let doctor = DoctorFactory::new(&db)
///     .specialization("Surgeon")
///     .experience(12)
///     .build()
///     .await?;
/// ```
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    specialization: String,
    experience: i32,
    phone: String,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Doctor {id}"`
    /// - specialization: `"Therapist"`
    /// - experience: `3`
    /// - phone: `"+7 701 000 {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Doctor {}", id),
            specialization: "Therapist".to_string(),
            experience: 3,
            phone: format!("+7 701 000 {}", id),
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builds and inserts the doctor entity into the database.
    pub async fn build(self) -> Result<entity::doctor::Model, DbErr> {
        entity::doctor::ActiveModel {
            id: ActiveValue::NotSet,
            full_name: ActiveValue::Set(self.full_name),
            specialization: ActiveValue::Set(self.specialization),
            experience: ActiveValue::Set(self.experience),
            phone: ActiveValue::Set(self.phone),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a doctor with default values.
pub async fn create_doctor(db: &DatabaseConnection) -> Result<entity::doctor::Model, DbErr> {
    DoctorFactory::new(db).build().await
}
