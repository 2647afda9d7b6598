//! Pet factory for creating test pet entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets with customizable fields.
///
/// A pet always belongs to an owner, so the owner id is required up front.
///
/// # Example
///
/// ```rust,ignore
/// let pet = PetFactory::new(&db, owner.id)
///     .species("Dog")
///     .breed(Some("Husky".to_string()))
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    species: String,
    breed: Option<String>,
    gender: String,
    birth_date: Option<NaiveDate>,
    color: Option<String>,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"`
    /// - species: `"Cat"`
    /// - gender: `"F"`
    /// - breed, birth_date, color: `None`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Pet {}", id),
            species: "Cat".to_string(),
            breed: None,
            gender: "F".to_string(),
            birth_date: None,
            color: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn breed(mut self, breed: Option<String>) -> Self {
        self.breed = breed;
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    /// Builds and inserts the pet entity into the database.
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            breed: ActiveValue::Set(self.breed),
            gender: ActiveValue::Set(self.gender),
            birth_date: ActiveValue::Set(self.birth_date),
            color: ActiveValue::Set(self.color),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet with default values for the specified owner.
pub async fn create_pet(db: &DatabaseConnection, owner_id: i32) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db, owner_id).build().await
}
