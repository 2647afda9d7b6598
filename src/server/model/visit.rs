use chrono::NaiveDate;

use crate::{
    model::visit::VisitDto,
    server::{
        error::validation::ValidationError,
        util::{coerce, payload::Payload, validate::validate_required},
    },
};

const REQUIRED_FIELDS: [&str; 2] = ["PetID", "DoctorID"];

/// A visit row.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: i32,
    pub pet_id: i32,
    pub doctor_id: i32,
    pub visit_date: NaiveDate,
    pub diagnosis: Option<String>,
    pub recommendations: Option<String>,
}

impl Visit {
    pub fn from_entity(entity: entity::visit::Model) -> Self {
        Self {
            id: entity.id,
            pet_id: entity.pet_id,
            doctor_id: entity.doctor_id,
            visit_date: entity.visit_date,
            diagnosis: entity.diagnosis,
            recommendations: entity.recommendations,
        }
    }

    pub fn into_dto(self) -> VisitDto {
        VisitDto {
            visit_id: self.id,
            pet_id: self.pet_id,
            doctor_id: self.doctor_id,
            visit_date: self.visit_date,
            diagnosis: self.diagnosis,
            recommendations: self.recommendations,
        }
    }
}

/// Parameters for inserting a visit.
///
/// A `None` visit date is replaced with today's server-local date on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVisitParam {
    pub pet_id: i32,
    pub doctor_id: i32,
    pub visit_date: Option<NaiveDate>,
    pub diagnosis: Option<String>,
    pub recommendations: Option<String>,
}

impl CreateVisitParam {
    pub fn from_payload(payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let payload = validate_required(payload, &REQUIRED_FIELDS)?;

        Ok(Self {
            pet_id: coerce::integer(payload, "PetID")?,
            doctor_id: coerce::integer(payload, "DoctorID")?,
            visit_date: coerce::optional_date(payload, "VisitDate")?,
            diagnosis: coerce::optional_text(payload, "Diagnosis")?,
            recommendations: coerce::optional_text(payload, "Recommendations")?,
        })
    }
}

/// Parameters for replacing a visit row.
///
/// Diagnosis and recommendations are overwritten (with `NULL` when omitted); the visit
/// date is only overwritten when supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVisitParam {
    pub id: i32,
    pub pet_id: i32,
    pub doctor_id: i32,
    pub visit_date: Option<NaiveDate>,
    pub diagnosis: Option<String>,
    pub recommendations: Option<String>,
}

impl UpdateVisitParam {
    pub fn from_payload(id: i32, payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let fields = CreateVisitParam::from_payload(payload)?;

        Ok(Self {
            id,
            pet_id: fields.pet_id,
            doctor_id: fields.doctor_id,
            visit_date: fields.visit_date,
            diagnosis: fields.diagnosis,
            recommendations: fields.recommendations,
        })
    }
}
