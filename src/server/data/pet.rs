use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::pet::{CreatePetParam, Pet, UpdatePetParam};

pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pet
    pub async fn get_all(&self) -> Result<Vec<Pet>, DbErr> {
        let pets = entity::prelude::Pet::find().all(self.db).await?;

        Ok(pets.into_iter().map(Pet::from_entity).collect())
    }

    /// Inserts a pet
    ///
    /// Fails with a foreign key violation when `owner_id` does not reference an owner.
    pub async fn create(&self, param: CreatePetParam) -> Result<Pet, DbErr> {
        let pet = entity::pet::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            name: ActiveValue::Set(param.name),
            species: ActiveValue::Set(param.species),
            breed: ActiveValue::Set(param.breed),
            gender: ActiveValue::Set(param.gender),
            birth_date: ActiveValue::Set(param.birth_date),
            color: ActiveValue::Set(param.color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pet::from_entity(pet))
    }

    /// Replaces every column of the pet, optional columns become `NULL` when omitted
    pub async fn update(&self, param: UpdatePetParam) -> Result<u64, DbErr> {
        let result = entity::prelude::Pet::update_many()
            .set(entity::pet::ActiveModel {
                owner_id: ActiveValue::Set(param.owner_id),
                name: ActiveValue::Set(param.name),
                species: ActiveValue::Set(param.species),
                breed: ActiveValue::Set(param.breed),
                gender: ActiveValue::Set(param.gender),
                birth_date: ActiveValue::Set(param.birth_date),
                color: ActiveValue::Set(param.color),
                ..Default::default()
            })
            .filter(entity::pet::Column::Id.eq(param.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a pet by id
    ///
    /// Fails with a foreign key violation while visits still reference the pet.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Pet::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
