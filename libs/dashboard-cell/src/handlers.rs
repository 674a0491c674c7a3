use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::services::{DashboardService, DASHBOARD_TAGS};

#[axum::debug_handler]
pub async fn get_dashboard_stats(State(service): State<Arc<DashboardService>>) -> Json<Value> {
    Json(json!(service.stats().await))
}

#[axum::debug_handler]
pub async fn get_system_status(State(service): State<Arc<DashboardService>>) -> Json<Value> {
    Json(json!(service.system_status().await))
}

#[axum::debug_handler]
pub async fn get_appointment_stats(State(service): State<Arc<DashboardService>>) -> Json<Value> {
    Json(json!(service.appointment_stats().await))
}

#[axum::debug_handler]
pub async fn get_consultation_stats(State(service): State<Arc<DashboardService>>) -> Json<Value> {
    Json(json!(service.consultation_stats().await))
}

#[axum::debug_handler]
pub async fn revalidate_dashboard(State(service): State<Arc<DashboardService>>) -> Json<Value> {
    let dropped = service.revalidate().await;
    Json(json!({
        "revalidated": DASHBOARD_TAGS,
        "dropped": dropped
    }))
}
