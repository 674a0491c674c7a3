use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dashboard_cell::models::{ApiState, DatabaseState, SystemStatus};
use dashboard_cell::router::dashboard_routes;
use dashboard_cell::services::DashboardService;
use shared_config::AppConfig;
use shared_database::BackendClient;
use shared_utils::test_utils::TestConfig;

fn setup(server: &MockServer) -> (Arc<BackendClient>, AppConfig) {
    let config = TestConfig::with_backend_url(&server.uri()).to_app_config();
    let backend = Arc::new(BackendClient::new(&config).unwrap());
    (backend, config)
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn stats_are_unwrapped_and_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "totalUsuarios": 12, "citasHoy": 3, "totalMedicos": 4 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, config) = setup(&server);
    let app = dashboard_routes(backend, &config);

    for _ in 0..2 {
        let json = get_json(&app, "/stats").await;
        assert_eq!(json["totalUsuarios"], 12);
        assert_eq!(json["citasHoy"], 3);
        assert_eq!(json["pacientesActivos"], 0);
    }
}

#[tokio::test]
async fn failures_fall_back_to_defaults_and_are_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/citas-stats"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let (backend, config) = setup(&server);
    let app = dashboard_routes(backend, &config);

    for _ in 0..2 {
        let json = get_json(&app, "/appointment-stats").await;
        assert_eq!(
            json,
            json!({ "confirmadas": 0, "pendientes": 0, "canceladas": 0, "completadas": 0 })
        );
    }
}

#[tokio::test]
async fn unreadable_status_defaults_to_operational() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/system-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "api": "exploded" })))
        .mount(&server)
        .await;

    let (backend, config) = setup(&server);
    let status = DashboardService::new(backend, &config).system_status().await;

    assert_eq!(status, SystemStatus::default());
    assert_eq!(status.api, ApiState::Active);
    assert_eq!(status.database, DatabaseState::Connected);
}

#[tokio::test]
async fn unconfigured_backend_serves_defaults() {
    let config = AppConfig::with_backend_url("");
    let backend = Arc::new(BackendClient::new(&config).unwrap());
    let app = dashboard_routes(backend, &config);

    let json = get_json(&app, "/consultation-stats").await;
    assert_eq!(json, json!({ "hoy": 0, "esteMes": 0, "esteAnio": 0, "total": 0 }));
}

#[tokio::test]
async fn revalidate_drops_every_dashboard_tag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/consultas-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hoy": 1, "esteMes": 5, "esteAnio": 40, "total": 90
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/system-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "api": "active", "database": "disconnected", "services": "maintenance" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (backend, config) = setup(&server);
    let app = dashboard_routes(backend, &config);

    assert_eq!(get_json(&app, "/consultation-stats").await["esteMes"], 5);
    assert_eq!(get_json(&app, "/system-status").await["database"], "disconnected");

    let response = app
        .clone()
        .oneshot(Request::builder().method("POST").uri("/revalidate").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["dropped"], 2);
    assert_eq!(json["revalidated"].as_array().unwrap().len(), 4);

    assert_eq!(get_json(&app, "/consultation-stats").await["total"], 90);
}
