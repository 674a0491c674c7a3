use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::BackendClient;

use crate::handlers;

pub fn user_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route("/patients", get(handlers::list_patient_users))
        .route(
            "/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(state)
}

pub fn role_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_roles).post(handlers::create_role))
        .route(
            "/{id}",
            get(handlers::get_role)
                .put(handlers::update_role)
                .delete(handlers::delete_role),
        )
        .with_state(state)
}
