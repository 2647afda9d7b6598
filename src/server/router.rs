use axum::{
    routing::{get, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        doctor::{DoctorDto, DoctorPayloadDto},
        owner::OwnerDto,
        pet::{PetDto, PetPayloadDto},
        service::{ServiceDto, ServicePayloadDto},
        visit::{VisitDto, VisitPayloadDto},
    },
    server::{
        controller::{
            doctor::{self, create_doctor, delete_doctor, get_doctors, update_doctor},
            owner::{self, get_owners},
            pet::{self, create_pet, delete_pet, get_pets, update_pet},
            service::{
                self, create_service, delete_service, get_services, update_service,
            },
            visit::{self, create_visit, delete_visit, get_visits, update_visit},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Veterinary Clinic API",
        description = "CRUD access to the clinic's doctors, pets, services and visits"
    ),
    paths(
        doctor::get_doctors,
        doctor::create_doctor,
        doctor::update_doctor,
        doctor::delete_doctor,
        owner::get_owners,
        pet::get_pets,
        pet::create_pet,
        pet::update_pet,
        pet::delete_pet,
        service::get_services,
        service::create_service,
        service::update_service,
        service::delete_service,
        visit::get_visits,
        visit::create_visit,
        visit::update_visit,
        visit::delete_visit,
    ),
    components(schemas(
        SuccessDto,
        ErrorDto,
        DoctorDto,
        DoctorPayloadDto,
        OwnerDto,
        PetDto,
        PetPayloadDto,
        ServiceDto,
        ServicePayloadDto,
        VisitDto,
        VisitPayloadDto,
    )),
    tags(
        (name = "doctor", description = "Clinic doctors"),
        (name = "owner", description = "Pet owners (read-only)"),
        (name = "pet", description = "Patients"),
        (name = "service", description = "Price list"),
        (name = "visit", description = "Appointments"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/doctors", get(get_doctors).post(create_doctor))
        .route("/api/doctors/{id}", put(update_doctor).delete(delete_doctor))
        .route("/api/owners", get(get_owners))
        .route("/api/pets", get(get_pets).post(create_pet))
        .route("/api/pets/{id}", put(update_pet).delete(delete_pet))
        .route("/api/services", get(get_services).post(create_service))
        .route(
            "/api/services/{id}",
            put(update_service).delete(delete_service),
        )
        .route("/api/visits", get(get_visits).post(create_visit))
        .route("/api/visits/{id}", put(update_visit).delete(delete_visit))
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
