use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_database::BackendClient;

use crate::handlers;
use crate::services::DashboardService;

pub fn dashboard_routes(backend: Arc<BackendClient>, config: &AppConfig) -> Router {
    let state = Arc::new(DashboardService::new(backend, config));

    Router::new()
        .route("/stats", get(handlers::get_dashboard_stats))
        .route("/system-status", get(handlers::get_system_status))
        .route("/appointment-stats", get(handlers::get_appointment_stats))
        .route("/consultation-stats", get(handlers::get_consultation_stats))
        .route("/revalidate", post(handlers::revalidate_dashboard))
        .with_state(state)
}
