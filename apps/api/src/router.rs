use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use consultation_cell::router::{consultation_routes, lab_analysis_routes};
use dashboard_cell::router::dashboard_routes;
use doctor_cell::router::{doctor_routes, specialty_routes};
use patient_cell::router::patient_routes;
use schedule_cell::router::schedule_routes;
use shared_config::AppConfig;
use shared_database::BackendClient;
use user_cell::router::{role_routes, user_routes};

pub fn create_router(backend: Arc<BackendClient>, config: &AppConfig) -> Router {
    let api = Router::new()
        .nest("/users", user_routes(backend.clone()))
        .nest("/roles", role_routes(backend.clone()))
        .nest("/patients", patient_routes(backend.clone()))
        .nest("/doctors", doctor_routes(backend.clone()))
        .nest("/specialties", specialty_routes(backend.clone()))
        .nest("/schedules", schedule_routes(backend.clone()))
        .nest("/appointments", appointment_routes(backend.clone()))
        .nest("/consultations", consultation_routes(backend.clone()))
        .nest("/lab-analyses", lab_analysis_routes(backend.clone()))
        .nest("/dashboard", dashboard_routes(backend, config));

    Router::new()
        .route("/", get(|| async { "CLINAPP admin API is running!" }))
        .nest("/api", api)
}
