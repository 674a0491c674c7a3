use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::BackendClient;
use shared_models::error::AppError;

use crate::models::{RoleRequest, UserRequest};
use crate::services::{RoleService, UserService};

// ==============================================================================
// USERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let users = UserService::new(state).list().await?;
    Ok(Json(json!(users)))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let user = UserService::new(state).get(id).await?;
    Ok(Json(json!(user)))
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<UserRequest>,
) -> Result<Json<Value>, AppError> {
    let user = UserService::new(state).create(request).await?;
    Ok(Json(json!(user)))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<UserRequest>,
) -> Result<Json<Value>, AppError> {
    let user = UserService::new(state).update(id, request).await?;
    Ok(Json(json!(user)))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    UserService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

#[axum::debug_handler]
pub async fn list_patient_users(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let users = UserService::new(state).patient_users().await?;
    Ok(Json(json!(users)))
}

// ==============================================================================
// ROLES
// ==============================================================================

#[axum::debug_handler]
pub async fn list_roles(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let roles = RoleService::new(state).list().await?;
    Ok(Json(json!(roles)))
}

#[axum::debug_handler]
pub async fn get_role(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let role = RoleService::new(state).get(id).await?;
    Ok(Json(json!(role)))
}

#[axum::debug_handler]
pub async fn create_role(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<RoleRequest>,
) -> Result<Json<Value>, AppError> {
    let role = RoleService::new(state).create(request).await?;
    Ok(Json(json!(role)))
}

#[axum::debug_handler]
pub async fn update_role(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<RoleRequest>,
) -> Result<Json<Value>, AppError> {
    let role = RoleService::new(state).update(id, request).await?;
    Ok(Json(json!(role)))
}

#[axum::debug_handler]
pub async fn delete_role(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    RoleService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}
