use crate::{
    model::service::ServiceDto,
    server::{
        error::validation::ValidationError,
        util::{coerce, payload::Payload, validate::validate_required},
    },
};

const REQUIRED_FIELDS: [&str; 2] = ["ServiceName", "Cost"];

/// A row of the clinic's price list.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicService {
    pub id: i32,
    pub service_name: String,
    pub cost: f64,
}

impl ClinicService {
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            service_name: entity.service_name,
            cost: entity.cost,
        }
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            service_id: self.id,
            service_name: self.service_name,
            cost: self.cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateServiceParam {
    pub service_name: String,
    pub cost: f64,
}

impl CreateServiceParam {
    pub fn from_payload(payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let payload = validate_required(payload, &REQUIRED_FIELDS)?;

        Ok(Self {
            service_name: coerce::text(payload, "ServiceName")?,
            cost: coerce::non_negative_number(payload, "Cost")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateServiceParam {
    pub id: i32,
    pub service_name: String,
    pub cost: f64,
}

impl UpdateServiceParam {
    pub fn from_payload(id: i32, payload: Option<&Payload>) -> Result<Self, ValidationError> {
        let fields = CreateServiceParam::from_payload(payload)?;

        Ok(Self {
            id,
            service_name: fields.service_name,
            cost: fields.cost,
        })
    }
}
