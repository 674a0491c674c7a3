use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::BackendClient;

use crate::handlers;

pub fn patient_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_patients).post(handlers::create_patient))
        .route(
            "/{id}",
            get(handlers::get_patient)
                .put(handlers::update_patient)
                .delete(handlers::delete_patient),
        )
        .with_state(state)
}
