use chrono::NaiveDate;

use crate::{
    model::pet::PetDto,
    server::{
        error::validation::ValidationError,
        util::{coerce, payload::Payload, validate::validate_required},
    },
};

const REQUIRED_FIELDS: [&str; 4] = ["OwnerID", "Name", "Species", "Gender"];

/// A pet row.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub color: Option<String>,
}

impl Pet {
    pub fn from_entity(entity: entity::pet::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            species: entity.species,
            breed: entity.breed,
            gender: entity.gender,
            birth_date: entity.birth_date,
            color: entity.color,
        }
    }

    pub fn into_dto(self) -> PetDto {
        PetDto {
            pet_id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            gender: self.gender,
            birth_date: self.birth_date,
            color: self.color,
        }
    }
}

/// Parameters for inserting a pet.
///
/// `owner_id` is not checked for existence; the database's foreign key rejects
/// dangling references.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePetParam {
    pub owner_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub color: Option<String>,
}

impl CreatePetParam {
    pub fn from_payload(payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let payload = validate_required(payload, &REQUIRED_FIELDS)?;

        Ok(Self {
            owner_id: coerce::integer(payload, "OwnerID")?,
            name: coerce::text(payload, "Name")?,
            species: coerce::text(payload, "Species")?,
            breed: coerce::optional_text(payload, "Breed")?,
            gender: coerce::text(payload, "Gender")?,
            birth_date: coerce::optional_date(payload, "BirthDate")?,
            color: coerce::optional_text(payload, "Color")?,
        })
    }
}

/// Parameters for replacing every column of a pet row.
///
/// Optional columns missing from the payload are written as `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePetParam {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub color: Option<String>,
}

impl UpdatePetParam {
    pub fn from_payload(id: i32, payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let fields = CreatePetParam::from_payload(payload)?;

        Ok(Self {
            id,
            owner_id: fields.owner_id,
            name: fields.name,
            species: fields.species,
            breed: fields.breed,
            gender: fields.gender,
            birth_date: fields.birth_date,
            color: fields.color,
        })
    }
}
