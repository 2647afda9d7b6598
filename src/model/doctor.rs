use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DoctorDto {
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    pub full_name: String,
    pub specialization: String,
    pub experience: i32,
    pub phone: String,
}

/// Request body for creating or replacing a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DoctorPayloadDto {
    pub full_name: String,
    pub specialization: String,
    /// Years of practice, must be non-negative.
    pub experience: i32,
    pub phone: String,
}
