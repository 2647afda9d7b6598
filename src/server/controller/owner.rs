use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        owner::OwnerDto,
    },
    server::{error::AppError, service::owner::OwnerService, state::AppState},
};

pub static OWNER_TAG: &str = "owner";

/// Owners are listed for pick-lists only; they are maintained outside this application.
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "All owners", body = DataDto<Vec<OwnerDto>>),
        (status = 500, description = "Database unavailable or query failed", body = ErrorDto)
    ),
)]
pub async fn get_owners(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let owners = OwnerService::new(&state.connections).get_all().await?;

    let dto: Vec<OwnerDto> = owners.into_iter().map(|o| o.into_dto()).collect();

    Ok(Json(DataDto::new(dto)))
}
