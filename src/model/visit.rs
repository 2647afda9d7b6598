use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VisitDto {
    #[serde(rename = "VisitID")]
    pub visit_id: i32,
    #[serde(rename = "PetID")]
    pub pet_id: i32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    pub visit_date: NaiveDate,
    pub diagnosis: Option<String>,
    pub recommendations: Option<String>,
}

/// Request body for creating or replacing a visit.
///
/// `VisitDate` defaults to the current server-local date on create and is left
/// untouched on update when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VisitPayloadDto {
    #[serde(rename = "PetID")]
    pub pet_id: i32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}
