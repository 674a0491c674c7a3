use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use shared_database::BackendClient;
use shared_models::error::AppError;
use shared_utils::dates::local_today;

use crate::models::{ChangeStatusRequest, CreateAppointmentRequest, ReportQuery, UpdateAppointmentRequest};
use crate::services::report::{self, ReportTemplate};
use crate::services::{stats, AppointmentService};

pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!("Failed to render template: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let appointments = AppointmentService::new(state).list().await?;
    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentService::new(state).get(id).await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<BackendClient>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentService::new(state).create(request).await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentService::new(state).update(id, request).await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    AppointmentService::new(state).delete(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

#[axum::debug_handler]
pub async fn change_appointment_status(
    State(state): State<Arc<BackendClient>>,
    Path(id): Path<i64>,
    Json(request): Json<ChangeStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentService::new(state)
        .change_status(id, request.estado)
        .await?;

    Ok(Json(json!({
        "appointment": appointment,
        "message": format!("Estado actualizado a: {}", request.estado.label())
    })))
}

#[axum::debug_handler]
pub async fn get_appointment_stats(
    State(state): State<Arc<BackendClient>>,
) -> Result<Json<Value>, AppError> {
    let appointments = AppointmentService::new(state).list().await?;
    Ok(Json(json!(stats::compute(&appointments, local_today()))))
}

#[axum::debug_handler]
pub async fn get_appointment_report(
    State(state): State<Arc<BackendClient>>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = AppointmentService::new(state).list().await?;
    let filter = query.filter.unwrap_or_default();
    let rows = report::build(&appointments, &filter);

    Ok(Json(json!({
        "filter": filter,
        "total": rows.len(),
        "rows": rows
    })))
}

#[axum::debug_handler]
pub async fn print_appointment_report(
    State(state): State<Arc<BackendClient>>,
    Query(query): Query<ReportQuery>,
) -> Result<HtmlTemplate<ReportTemplate>, AppError> {
    let appointments = AppointmentService::new(state).list().await?;
    let filter = query.filter.unwrap_or_default();
    let rows = report::build(&appointments, &filter);

    Ok(HtmlTemplate(ReportTemplate::new(rows, &filter)))
}
