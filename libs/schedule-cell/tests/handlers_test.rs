use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use schedule_cell::handlers::*;
use schedule_cell::models::{CheckAvailabilityRequest, ScheduleRequest};
use schedule_cell::router::schedule_routes;
use shared_database::BackendClient;
use shared_models::error::AppError;
use shared_utils::test_utils::{MockBackendResponses, TestConfig};

fn backend_for(server: &MockServer) -> Arc<BackendClient> {
    let config = TestConfig::with_backend_url(&server.uri()).to_app_config();
    Arc::new(BackendClient::new(&config).unwrap())
}

async fn mount_schedules(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/horariosmedicos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockBackendResponses::schedule(1, 4, "Miércoles", "08:00", "12:00", "activo"),
            MockBackendResponses::schedule(2, 4, "Jueves", "14:00", "18:00", "inactivo"),
            MockBackendResponses::schedule(3, 5, "Jueves", "08:00", "12:00", "activo"),
        ])))
        .mount(server)
        .await;
}

fn check_request(fecha: &str, inicio: &str, fin: &str) -> CheckAvailabilityRequest {
    CheckAvailabilityRequest {
        fecha: Some(fecha.to_string()),
        hora_inicio: Some(inicio.to_string()),
        hora_fin: Some(fin.to_string()),
    }
}

#[tokio::test]
async fn doctor_schedules_are_filtered_by_doctor() {
    let server = MockServer::start().await;
    mount_schedules(&server).await;

    let Json(body) = get_doctor_schedules(State(backend_for(&server)), Path(4)).await.unwrap();

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id_horario"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn check_allows_request_inside_wednesday_window() {
    let server = MockServer::start().await;
    mount_schedules(&server).await;

    // 2025-03-05 is a Wednesday
    let Json(body) = check_doctor_availability(
        State(backend_for(&server)),
        Path(4),
        Json(check_request("2025-03-05", "09:00", "10:00")),
    )
    .await
    .unwrap();

    assert_eq!(body, json!({ "allowed": true }));
}

#[tokio::test]
async fn check_ignores_inactive_windows() {
    let server = MockServer::start().await;
    mount_schedules(&server).await;

    // Thursday window of doctor 4 is inactive
    let Json(body) = check_doctor_availability(
        State(backend_for(&server)),
        Path(4),
        Json(check_request("2025-03-06", "15:00", "16:00")),
    )
    .await
    .unwrap();

    assert_eq!(body["allowed"], false);
    assert_eq!(body["rejection"], "no_availability");
    assert_eq!(body["reason"], "El médico no tiene horario disponible para Jueves");
}

#[tokio::test]
async fn check_with_missing_fields_is_a_result_not_an_error() {
    let server = MockServer::start().await;
    mount_schedules(&server).await;

    let Json(body) = check_doctor_availability(
        State(backend_for(&server)),
        Path(4),
        Json(CheckAvailabilityRequest::default()),
    )
    .await
    .unwrap();

    assert_eq!(body["allowed"], false);
    assert_eq!(body["reason"], "Fecha y horas son requeridas");
}

#[tokio::test]
async fn malformed_time_is_a_validation_error() {
    let server = MockServer::start().await;

    let result = check_doctor_availability(
        State(backend_for(&server)),
        Path(4),
        Json(check_request("2025-03-05", "nueve", "10:00")),
    )
    .await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn create_sends_normalized_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/horariosmedicos"))
        .and(body_json(json!({
            "id_medico": 4,
            "dia_semana": "Sábado",
            "hora_inicio": "09:00",
            "hora_fin": "13:00",
            "estado": "activo"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockBackendResponses::schedule(9, 4, "Sábado", "09:00", "13:00", "activo"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = ScheduleRequest {
        id_medico: 4,
        dia_semana: "sabado".to_string(),
        hora_inicio: "09:00".to_string(),
        hora_fin: "13:00".to_string(),
        estado: None,
    };

    let Json(body) = create_schedule(State(backend_for(&server)), Json(request)).await.unwrap();
    assert_eq!(body["id_horario"], 9);
}

#[tokio::test]
async fn create_rejects_reversed_window_without_calling_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/horariosmedicos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let request = ScheduleRequest {
        id_medico: 4,
        dia_semana: "Lunes".to_string(),
        hora_inicio: "12:00".to_string(),
        hora_fin: "08:00".to_string(),
        estado: None,
    };

    let result = create_schedule(State(backend_for(&server)), Json(request)).await;
    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg == "La hora de inicio debe ser anterior a la hora de fin");
}

#[tokio::test]
async fn router_serves_availability_check() {
    let server = MockServer::start().await;
    mount_schedules(&server).await;

    let app = schedule_routes(backend_for(&server));

    let request = Request::builder()
        .method("POST")
        .uri("/doctor/4/check")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "fecha": "2025-03-05", "hora_inicio": "07:00", "hora_fin": "09:00" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["reason"], "El horario debe estar entre 08:00 y 12:00");
}

#[tokio::test]
async fn router_maps_missing_schedule_to_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/horariosmedicos/77"))
        .respond_with(ResponseTemplate::new(404).set_body_json(MockBackendResponses::error_response("No encontrado")))
        .mount(&server)
        .await;

    let app = schedule_routes(backend_for(&server));
    let response = app
        .oneshot(Request::builder().uri("/77").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
