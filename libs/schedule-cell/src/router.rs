use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_database::BackendClient;

use crate::handlers;

pub fn schedule_routes(state: Arc<BackendClient>) -> Router {
    Router::new()
        .route("/", get(handlers::list_schedules).post(handlers::create_schedule))
        .route(
            "/{id}",
            get(handlers::get_schedule)
                .put(handlers::update_schedule)
                .delete(handlers::delete_schedule),
        )
        .route("/doctor/{doctor_id}", get(handlers::get_doctor_schedules))
        .route("/doctor/{doctor_id}/check", post(handlers::check_doctor_availability))
        .with_state(state)
}
