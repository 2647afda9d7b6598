use crate::{
    model::doctor::DoctorDto,
    server::{
        error::validation::ValidationError,
        util::{coerce, payload::Payload, validate::validate_required},
    },
};

const REQUIRED_FIELDS: [&str; 4] = ["FullName", "Specialization", "Experience", "Phone"];

/// A doctor row.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: i32,
    pub full_name: String,
    pub specialization: String,
    pub experience: i32,
    pub phone: String,
}

impl Doctor {
    /// Converts an entity model at the data layer boundary.
    pub fn from_entity(entity: entity::doctor::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            specialization: entity.specialization,
            experience: entity.experience,
            phone: entity.phone,
        }
    }

    pub fn into_dto(self) -> DoctorDto {
        DoctorDto {
            doctor_id: self.id,
            full_name: self.full_name,
            specialization: self.specialization,
            experience: self.experience,
            phone: self.phone,
        }
    }
}

/// Parameters for inserting a doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDoctorParam {
    pub full_name: String,
    pub specialization: String,
    pub experience: i32,
    pub phone: String,
}

impl CreateDoctorParam {
    /// Validates and coerces a request payload.
    ///
    /// # Returns
    /// - `Ok(CreateDoctorParam)` - All fields present, `Experience` a non-negative integer
    /// - `Err(ValidationError)` - Missing payload or fields, or a bad `Experience`
    pub fn from_payload(payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let payload = validate_required(payload, &REQUIRED_FIELDS)?;

        Ok(Self {
            full_name: coerce::text(payload, "FullName")?,
            specialization: coerce::text(payload, "Specialization")?,
            experience: coerce::non_negative_integer(payload, "Experience")?,
            phone: coerce::text(payload, "Phone")?,
        })
    }
}

/// Parameters for replacing every column of a doctor row.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDoctorParam {
    pub id: i32,
    pub full_name: String,
    pub specialization: String,
    pub experience: i32,
    pub phone: String,
}

impl UpdateDoctorParam {
    /// Validates and coerces a replacement payload with the same rules as creation.
    pub fn from_payload(id: i32, payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let fields = CreateDoctorParam::from_payload(payload)?;

        Ok(Self {
            id,
            full_name: fields.full_name,
            specialization: fields.specialization,
            experience: fields.experience,
            phone: fields.phone,
        })
    }
}
