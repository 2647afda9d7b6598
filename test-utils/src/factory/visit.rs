//! Visit factory for creating test visit entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test visits with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let visit = VisitFactory::new(&db, pet.id, doctor.id)
///     .diagnosis(Some("Otitis".to_string()))
///     .build()
///     .await?;
/// ```
pub struct VisitFactory<'a> {
    db: &'a DatabaseConnection,
    pet_id: i32,
    doctor_id: i32,
    visit_date: NaiveDate,
    diagnosis: Option<String>,
    recommendations: Option<String>,
}

impl<'a> VisitFactory<'a> {
    /// Creates a new VisitFactory with default values.
    ///
    /// Defaults:
    /// - visit_date: `2024-01-15`
    /// - diagnosis: `"Healthy"`
    /// - recommendations: `None`
    pub fn new(db: &'a DatabaseConnection, pet_id: i32, doctor_id: i32) -> Self {
        Self {
            db,
            pet_id,
            doctor_id,
            visit_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            diagnosis: Some("Healthy".to_string()),
            recommendations: None,
        }
    }

    pub fn visit_date(mut self, visit_date: NaiveDate) -> Self {
        self.visit_date = visit_date;
        self
    }

    pub fn diagnosis(mut self, diagnosis: Option<String>) -> Self {
        self.diagnosis = diagnosis;
        self
    }

    pub fn recommendations(mut self, recommendations: Option<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Builds and inserts the visit entity into the database.
    pub async fn build(self) -> Result<entity::visit::Model, DbErr> {
        entity::visit::ActiveModel {
            id: ActiveValue::NotSet,
            pet_id: ActiveValue::Set(self.pet_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            visit_date: ActiveValue::Set(self.visit_date),
            diagnosis: ActiveValue::Set(self.diagnosis),
            recommendations: ActiveValue::Set(self.recommendations),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visit with default values for the specified pet and doctor.
pub async fn create_visit(
    db: &DatabaseConnection,
    pet_id: i32,
    doctor_id: i32,
) -> Result<entity::visit::Model, DbErr> {
    VisitFactory::new(db, pet_id, doctor_id).build().await
}
