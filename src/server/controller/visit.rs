use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, SuccessDto},
        visit::{VisitDto, VisitPayloadDto},
    },
    server::{
        error::AppError,
        model::visit::{CreateVisitParam, UpdateVisitParam},
        service::visit::VisitService,
        state::AppState,
        util::{parse::path_id, payload::parse_payload},
    },
};

pub static VISIT_TAG: &str = "visit";

#[utoipa::path(
    get,
    path = "/api/visits",
    tag = VISIT_TAG,
    responses(
        (status = 200, description = "All visits", body = DataDto<Vec<VisitDto>>),
        (status = 500, description = "Database unavailable or query failed", body = ErrorDto)
    ),
)]
pub async fn get_visits(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let visits = VisitService::new(&state.connections).get_all().await?;

    let dto: Vec<VisitDto> = visits.into_iter().map(|v| v.into_dto()).collect();

    Ok(Json(DataDto::new(dto)))
}

#[utoipa::path(
    post,
    path = "/api/visits",
    tag = VISIT_TAG,
    request_body = VisitPayloadDto,
    responses(
        (status = 200, description = "Visit recorded", body = SuccessDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Unknown pet or doctor, or database unavailable", body = ErrorDto)
    ),
)]
pub async fn create_visit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;
    let param = CreateVisitParam::from_payload(payload.as_ref())?;

    VisitService::new(&state.connections).create(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    put,
    path = "/api/visits/{id}",
    tag = VISIT_TAG,
    params(
        ("id" = i32, Path, description = "Visit ID")
    ),
    request_body = VisitPayloadDto,
    responses(
        (status = 200, description = "Visit replaced, or no visit had the id", body = SuccessDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Unknown pet or doctor, or database unavailable", body = ErrorDto)
    ),
)]
pub async fn update_visit(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let payload = parse_payload(&body)?;
    let param = UpdateVisitParam::from_payload(id, payload.as_ref())?;

    VisitService::new(&state.connections).update(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/visits/{id}",
    tag = VISIT_TAG,
    params(
        ("id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 200, description = "Visit deleted, or no visit had the id", body = SuccessDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 500, description = "Database unavailable or delete failed", body = ErrorDto)
    ),
)]
pub async fn delete_visit(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;

    VisitService::new(&state.connections).delete(id).await?;

    Ok(Json(SuccessDto::ok()))
}
