use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::BackendClient;
use shared_models::error::AppError;

use crate::models::{DoctorRequest, DoctorView, SpecialtyRequest};
use crate::services::{DoctorService, SpecialtyService};

// ==============================================================================
// DOCTORS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let doctors: Vec<DoctorView> = DoctorService::new(state)
        .list()
        .await?
        .into_iter()
        .map(DoctorView::from)
        .collect();
    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let doctor = DoctorService::new(state).get(id).await?;
    Ok(Json(json!(DoctorView::from(doctor))))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<DoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = DoctorService::new(state).create(request).await?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<DoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor = DoctorService::new(state).update(id, request).await?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    DoctorService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

// ==============================================================================
// SPECIALTIES
// ==============================================================================

#[axum::debug_handler]
pub async fn list_specialties(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let specialties = SpecialtyService::new(state).list().await?;
    Ok(Json(json!(specialties)))
}

#[axum::debug_handler]
pub async fn get_specialty(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let specialty = SpecialtyService::new(state).get(id).await?;
    Ok(Json(json!(specialty)))
}

#[axum::debug_handler]
pub async fn create_specialty(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<SpecialtyRequest>,
) -> Result<Json<Value>, AppError> {
    let specialty = SpecialtyService::new(state).create(request).await?;
    Ok(Json(json!(specialty)))
}

#[axum::debug_handler]
pub async fn update_specialty(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<SpecialtyRequest>,
) -> Result<Json<Value>, AppError> {
    let specialty = SpecialtyService::new(state).update(id, request).await?;
    Ok(Json(json!(specialty)))
}

#[axum::debug_handler]
pub async fn delete_specialty(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    SpecialtyService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}
