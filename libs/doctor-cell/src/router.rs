use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::BackendClient;

use crate::handlers;

pub fn doctor_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route(
            "/{id}",
            get(handlers::get_doctor)
                .put(handlers::update_doctor)
                .delete(handlers::delete_doctor),
        )
        .with_state(state)
}

pub fn specialty_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_specialties).post(handlers::create_specialty))
        .route(
            "/{id}",
            get(handlers::get_specialty)
                .put(handlers::update_specialty)
                .delete(handlers::delete_specialty),
        )
        .with_state(state)
}
