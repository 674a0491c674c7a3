use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::BackendClient;
use shared_models::error::AppError;

use crate::models::{AvailabilityQuery, CheckAvailabilityRequest, ScheduleRequest};
use crate::services::ScheduleService;

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let schedules = ScheduleService::new(state).list().await?;
    Ok(Json(json!(schedules)))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let schedule = ScheduleService::new(state).get(id).await?;
    Ok(Json(json!(schedule)))
}

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let schedule = ScheduleService::new(state).create(request).await?;
    Ok(Json(json!(schedule)))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let schedule = ScheduleService::new(state).update(id, request).await?;
    Ok(Json(json!(schedule)))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    ScheduleService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

#[axum::debug_handler]
pub async fn get_doctor_schedules(
    State(state): State<Arc<BackendClient>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let schedules = ScheduleService::new(state).by_doctor(doctor_id).await?;
    Ok(Json(json!(schedules)))
}

#[axum::debug_handler]
pub async fn check_doctor_availability(
    State(state): State<Arc<BackendClient>>,
    Path(doctor_id): Path<i64>,
    Json(request): Json<CheckAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    let query = AvailabilityQuery::from_raw(
        request.fecha.as_deref(),
        request.hora_inicio.as_deref(),
        request.hora_fin.as_deref(),
    )?;

    let result = ScheduleService::new(state).check(doctor_id, &query).await?;
    Ok(Json(json!(result)))
}
