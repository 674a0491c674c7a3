use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use shared_database::BackendClient;

use crate::handlers;

pub fn appointment_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::create_appointment))
        .route("/stats", get(handlers::get_appointment_stats))
        .route("/report", get(handlers::get_appointment_report))
        .route("/report/print", get(handlers::print_appointment_report))
        .route(
            "/{id}",
            get(handlers::get_appointment)
                .put(handlers::update_appointment)
                .delete(handlers::delete_appointment),
        )
        .route("/{id}/status", patch(handlers::change_appointment_status))
        .with_state(state)
}
