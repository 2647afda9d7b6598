use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PetDto {
    #[serde(rename = "PetID")]
    pub pet_id: i32,
    #[serde(rename = "OwnerID")]
    pub owner_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub color: Option<String>,
}

/// Request body for creating or replacing a pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PetPayloadDto {
    #[serde(rename = "OwnerID")]
    pub owner_id: i32,
    pub name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
