use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, SuccessDto},
        pet::{PetDto, PetPayloadDto},
    },
    server::{
        error::AppError,
        model::pet::{CreatePetParam, UpdatePetParam},
        service::pet::PetService,
        state::AppState,
        util::{parse::path_id, payload::parse_payload},
    },
};

pub static PET_TAG: &str = "pet";

#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    responses(
        (status = 200, description = "All pets", body = DataDto<Vec<PetDto>>),
        (status = 500, description = "Database unavailable or query failed", body = ErrorDto)
    ),
)]
pub async fn get_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pets = PetService::new(&state.connections).get_all().await?;

    let dto: Vec<PetDto> = pets.into_iter().map(|p| p.into_dto()).collect();

    Ok(Json(DataDto::new(dto)))
}

#[utoipa::path(
    post,
    path = "/api/pets",
    tag = PET_TAG,
    request_body = PetPayloadDto,
    responses(
        (status = 200, description = "Pet created", body = SuccessDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Unknown owner or database unavailable", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;
    let param = CreatePetParam::from_payload(payload.as_ref())?;

    PetService::new(&state.connections).create(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    put,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    request_body = PetPayloadDto,
    responses(
        (status = 200, description = "Pet replaced, or no pet had the id", body = SuccessDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Unknown owner or database unavailable", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let payload = parse_payload(&body)?;
    let param = UpdatePetParam::from_payload(id, payload.as_ref())?;

    PetService::new(&state.connections).update(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/pets/{id}",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet deleted, or no pet had the id", body = SuccessDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 500, description = "Pet still has visits or database unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;

    PetService::new(&state.connections).delete(id).await?;

    Ok(Json(SuccessDto::ok()))
}
