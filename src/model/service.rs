use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceDto {
    #[serde(rename = "ServiceID")]
    pub service_id: i32,
    pub service_name: String,
    pub cost: f64,
}

/// Request body for creating or replacing a clinic service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ServicePayloadDto {
    pub service_name: String,
    /// Price, must be non-negative.
    pub cost: f64,
}
