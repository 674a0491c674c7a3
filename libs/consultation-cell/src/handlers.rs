use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::BackendClient;
use shared_models::error::AppError;
use shared_utils::dates::local_today;

use crate::models::{CatalogQuery, ConsultationRequest, LabAnalysisRequest};
use crate::services::{catalog, stats, ConsultationService, LabAnalysisService};

// ==============================================================================
// CONSULTATIONS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_consultations(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let consultations = ConsultationService::new(state).list().await?;
    Ok(Json(json!(consultations)))
}

#[axum::debug_handler]
pub async fn get_consultation(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let consultation = ConsultationService::new(state).get(id).await?;
    Ok(Json(json!(consultation)))
}

#[axum::debug_handler]
pub async fn create_consultation(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<ConsultationRequest>,
) -> Result<Json<Value>, AppError> {
    let consultation = ConsultationService::new(state).create(request).await?;
    Ok(Json(json!(consultation)))
}

#[axum::debug_handler]
pub async fn update_consultation(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<ConsultationRequest>,
) -> Result<Json<Value>, AppError> {
    let consultation = ConsultationService::new(state).update(id, request).await?;
    Ok(Json(json!(consultation)))
}

#[axum::debug_handler]
pub async fn delete_consultation(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    ConsultationService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

#[axum::debug_handler]
pub async fn get_appointment_consultations(
    State(state): State<Arc<BackendClient>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let consultations = ConsultationService::new(state)
        .by_appointment(appointment_id)
        .await?;
    Ok(Json(json!(consultations)))
}

#[axum::debug_handler]
pub async fn get_consultation_stats(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let consultations = ConsultationService::new(state).list().await?;
    Ok(Json(json!(stats::compute(&consultations, local_today()))))
}

// ==============================================================================
// LAB ANALYSES
// ==============================================================================

#[axum::debug_handler]
pub async fn list_lab_analyses(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let analyses = LabAnalysisService::new(state).list().await?;
    Ok(Json(json!(analyses)))
}

#[axum::debug_handler]
pub async fn get_lab_analysis(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let analysis = LabAnalysisService::new(state).get(id).await?;
    Ok(Json(json!(analysis)))
}

#[axum::debug_handler]
pub async fn create_lab_analysis(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<LabAnalysisRequest>,
) -> Result<Json<Value>, AppError> {
    let analysis = LabAnalysisService::new(state).create(request).await?;
    Ok(Json(json!(analysis)))
}

#[axum::debug_handler]
pub async fn update_lab_analysis(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<LabAnalysisRequest>,
) -> Result<Json<Value>, AppError> {
    let analysis = LabAnalysisService::new(state).update(id, request).await?;
    Ok(Json(json!(analysis)))
}

#[axum::debug_handler]
pub async fn delete_lab_analysis(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    LabAnalysisService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

pub async fn get_lab_test_catalog(Query(query): Query<CatalogQuery>) -> Json<Value> {
    let tests = catalog::query(query.category.as_deref(), query.search.as_deref());
    Json(json!({
        "tests": tests,
        "total": tests.len()
    }))
}

pub async fn get_lab_test_categories() -> Json<Value> {
    Json(json!(catalog::CATEGORIES))
}
