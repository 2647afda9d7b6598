use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, SuccessDto},
        service::{ServiceDto, ServicePayloadDto},
    },
    server::{
        error::AppError,
        model::service::{CreateServiceParam, UpdateServiceParam},
        service::catalog::CatalogService,
        state::AppState,
        util::{parse::path_id, payload::parse_payload},
    },
};

pub static SERVICE_TAG: &str = "service";

#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "The full price list", body = DataDto<Vec<ServiceDto>>),
        (status = 500, description = "Database unavailable or query failed", body = ErrorDto)
    ),
)]
pub async fn get_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = CatalogService::new(&state.connections).get_all().await?;

    let dto: Vec<ServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok(Json(DataDto::new(dto)))
}

#[utoipa::path(
    post,
    path = "/api/services",
    tag = SERVICE_TAG,
    request_body = ServicePayloadDto,
    responses(
        (status = 200, description = "Service created", body = SuccessDto),
        (status = 400, description = "Missing name or invalid cost", body = ErrorDto),
        (status = 500, description = "Database unavailable or insert failed", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;
    let param = CreateServiceParam::from_payload(payload.as_ref())?;

    CatalogService::new(&state.connections).create(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    request_body = ServicePayloadDto,
    responses(
        (status = 200, description = "Service replaced, or no service had the id", body = SuccessDto),
        (status = 400, description = "Missing name or invalid cost", body = ErrorDto),
        (status = 500, description = "Database unavailable or update failed", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let payload = parse_payload(&body)?;
    let param = UpdateServiceParam::from_payload(id, payload.as_ref())?;

    CatalogService::new(&state.connections).update(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service deleted, or no service had the id", body = SuccessDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 500, description = "Database unavailable or delete failed", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;

    CatalogService::new(&state.connections).delete(id).await?;

    Ok(Json(SuccessDto::ok()))
}
