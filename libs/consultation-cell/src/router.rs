use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::BackendClient;

use crate::handlers;

pub fn consultation_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_consultations).post(handlers::create_consultation))
        .route("/stats", get(handlers::get_consultation_stats))
        .route("/appointment/{appointment_id}", get(handlers::get_appointment_consultations))
        .route(
            "/{id}",
            get(handlers::get_consultation)
                .put(handlers::update_consultation)
                .delete(handlers::delete_consultation),
        )
        .with_state(state)
}

pub fn lab_analysis_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_lab_analyses).post(handlers::create_lab_analysis))
        .route("/catalog", get(handlers::get_lab_test_catalog))
        .route("/categories", get(handlers::get_lab_test_categories))
        .route(
            "/{id}",
            get(handlers::get_lab_analysis)
                .put(handlers::update_lab_analysis)
                .delete(handlers::delete_lab_analysis),
        )
        .with_state(state)
}
