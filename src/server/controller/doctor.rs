use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, SuccessDto},
        doctor::{DoctorDto, DoctorPayloadDto},
    },
    server::{
        error::AppError,
        model::doctor::{CreateDoctorParam, UpdateDoctorParam},
        service::doctor::DoctorService,
        state::AppState,
        util::{parse::path_id, payload::parse_payload},
    },
};

pub static DOCTOR_TAG: &str = "doctor";

#[utoipa::path(
    get,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    responses(
        (status = 200, description = "All doctors", body = DataDto<Vec<DoctorDto>>),
        (status = 500, description = "Database unavailable or query failed", body = ErrorDto)
    ),
)]
pub async fn get_doctors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let doctors = DoctorService::new(&state.connections).get_all().await?;

    let dto: Vec<DoctorDto> = doctors.into_iter().map(|d| d.into_dto()).collect();

    Ok(Json(DataDto::new(dto)))
}

#[utoipa::path(
    post,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    request_body = DoctorPayloadDto,
    responses(
        (status = 200, description = "Doctor created", body = SuccessDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Database unavailable or insert failed", body = ErrorDto)
    ),
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;
    let param = CreateDoctorParam::from_payload(payload.as_ref())?;

    DoctorService::new(&state.connections).create(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    put,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Doctor ID")
    ),
    request_body = DoctorPayloadDto,
    responses(
        (status = 200, description = "Doctor replaced, or no doctor had the id", body = SuccessDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Database unavailable or update failed", body = ErrorDto)
    ),
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let payload = parse_payload(&body)?;
    let param = UpdateDoctorParam::from_payload(id, payload.as_ref())?;

    DoctorService::new(&state.connections).update(param).await?;

    Ok(Json(SuccessDto::ok()))
}

#[utoipa::path(
    delete,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Doctor deleted, or no doctor had the id", body = SuccessDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 500, description = "Doctor still has visits or database unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;

    DoctorService::new(&state.connections).delete(id).await?;

    Ok(Json(SuccessDto::ok()))
}
