use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::BackendClient;
use shared_models::error::AppError;

use crate::models::PatientRequest;
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let patients = PatientService::new(state).list().await?;
    Ok(Json(json!(patients)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(state).get(id).await?;
    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<PatientRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(state).create(request).await?;
    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<PatientRequest>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(state).update(id, request).await?;
    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    PatientService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}
