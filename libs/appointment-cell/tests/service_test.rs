use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::Weekday;
use mockall::mock;
use mockall::predicate::eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::models::{AppointmentError, AppointmentStatus, CreateAppointmentRequest, UpdateAppointmentRequest};
use appointment_cell::services::AppointmentService;
use schedule_cell::{ClockTime, RejectionKind, ScheduleError, ScheduleLookup, WeeklyAvailabilityWindow};
use shared_database::{BackendClient, BackendError};
use shared_utils::test_utils::{MockBackendResponses, TestConfig};

mock! {
    pub Lookup {}

    #[async_trait]
    impl ScheduleLookup for Lookup {
        async fn active_windows(&self, doctor_id: i64) -> Result<Vec<WeeklyAvailabilityWindow>, ScheduleError>;
    }
}

fn wednesday_morning() -> Vec<WeeklyAvailabilityWindow> {
    vec![WeeklyAvailabilityWindow {
        weekday: Weekday::Wed,
        start_time: ClockTime::new(8, 0).unwrap(),
        end_time: ClockTime::new(12, 0).unwrap(),
        active: true,
    }]
}

fn backend_for(server: &MockServer) -> Arc<BackendClient> {
    let config = TestConfig::with_backend_url(&server.uri()).to_app_config();
    Arc::new(BackendClient::new(&config).unwrap())
}

fn create_request(fecha: &str, inicio: &str, fin: &str) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        id_usuario: 10,
        id_medico: Some(4),
        fecha: Some(fecha.to_string()),
        hora_inicio: Some(inicio.to_string()),
        hora_fin: Some(fin.to_string()),
        estado: AppointmentStatus::default(),
        motivo: Some("Control".to_string()),
        observaciones: None,
        consultorio: None,
    }
}

#[tokio::test]
async fn create_within_availability_posts_with_pending_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/citas"))
        .and(body_json(json!({
            "id_usuario": 10,
            "id_medico": 4,
            "fecha": "2025-03-05",
            "hora_inicio": "09:00",
            "hora_fin": "10:00",
            "estado": "pendiente",
            "motivo": "Control"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockBackendResponses::appointment(31, 4, "2025-03-05", "pendiente"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut lookup = MockLookup::new();
    lookup
        .expect_active_windows()
        .with(eq(4))
        .times(1)
        .returning(|_| Ok(wednesday_morning()));

    let service = AppointmentService::with_schedule_lookup(backend_for(&server), Arc::new(lookup));
    let created = service.create(create_request("2025-03-05", "09:00", "10:00")).await.unwrap();

    assert_eq!(created.id, 31);
    assert_eq!(created.status_or_default(), "pendiente");
}

#[tokio::test]
async fn create_outside_availability_is_rejected_with_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/citas"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut lookup = MockLookup::new();
    lookup.expect_active_windows().returning(|_| Ok(wednesday_morning()));

    let service = AppointmentService::with_schedule_lookup(backend_for(&server), Arc::new(lookup));
    let err = service
        .create(create_request("2025-03-05", "07:00", "09:00"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        AppointmentError::Unavailable { kind: RejectionKind::OutsideWindow, ref reason }
            if reason == "El horario debe estar entre 08:00 y 12:00"
    );
}

#[tokio::test]
async fn create_without_doctor_skips_the_check() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/citas"))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockBackendResponses::appointment(32, 4, "2025-03-05", "pendiente"),
        ))
        .mount(&server)
        .await;

    let mut lookup = MockLookup::new();
    lookup.expect_active_windows().times(0);

    let service = AppointmentService::with_schedule_lookup(backend_for(&server), Arc::new(lookup));
    let request = CreateAppointmentRequest {
        id_medico: None,
        ..create_request("2025-03-05", "07:00", "09:00")
    };

    assert!(service.create(request).await.is_ok());
}

#[tokio::test]
async fn schedule_lookup_failures_are_propagated() {
    let server = MockServer::start().await;

    let mut lookup = MockLookup::new();
    lookup
        .expect_active_windows()
        .returning(|_| Err(ScheduleError::Backend(BackendError::NotConfigured)));

    let service = AppointmentService::with_schedule_lookup(backend_for(&server), Arc::new(lookup));
    let err = service
        .create(create_request("2025-03-05", "09:00", "10:00"))
        .await
        .unwrap_err();

    assert_matches!(err, AppointmentError::Schedule(ScheduleError::Backend(BackendError::NotConfigured)));
}

#[tokio::test]
async fn update_checks_the_new_slot() {
    let server = MockServer::start().await;

    let mut lookup = MockLookup::new();
    lookup.expect_active_windows().returning(|_| Ok(wednesday_morning()));

    let service = AppointmentService::with_schedule_lookup(backend_for(&server), Arc::new(lookup));

    // 2025-03-06 is a Thursday
    let request = UpdateAppointmentRequest {
        id_medico: Some(4),
        fecha: Some("2025-03-06".to_string()),
        hora_inicio: Some("09:00".to_string()),
        hora_fin: Some("10:00".to_string()),
        ..Default::default()
    };

    let err = service.update(31, request).await.unwrap_err();
    assert_matches!(err, AppointmentError::Unavailable { kind: RejectionKind::NoAvailability, .. });
}

#[tokio::test]
async fn unchanged_status_is_refused() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/citas/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::appointment(31, 4, "2025-03-05", "confirmada"),
        ))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/citas/31"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = AppointmentService::with_schedule_lookup(backend_for(&server), Arc::new(MockLookup::new()));
    let err = service
        .change_status(31, AppointmentStatus::Confirmed)
        .await
        .unwrap_err();

    assert_matches!(err, AppointmentError::StatusUnchanged);
}

#[tokio::test]
async fn status_change_sends_only_the_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/citas/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::appointment(31, 4, "2025-03-05", "pendiente"),
        ))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/citas/31"))
        .and(body_json(json!({ "estado": "completada" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::appointment(31, 4, "2025-03-05", "completada"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let service = AppointmentService::with_schedule_lookup(backend_for(&server), Arc::new(MockLookup::new()));
    let updated = service
        .change_status(31, AppointmentStatus::Completed)
        .await
        .unwrap();

    assert_eq!(updated.status(), Some(AppointmentStatus::Completed));
}
