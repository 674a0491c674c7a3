use std::sync::Arc;

use serde_json::json;

use shared_config::AppConfig;

/// Test configuration pointing at a mock backend.
pub struct TestConfig {
    pub backend_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_backend_url(url: &str) -> Self {
        Self {
            backend_url: url.to_string(),
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig::with_backend_url(&self.backend_url)
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Canned backend payloads using the backend's field names.
pub struct MockBackendResponses;

impl MockBackendResponses {
    pub fn role(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "nombre": name,
            "created_at": "2025-01-01T00:00:00.000000Z",
            "updated_at": "2025-01-01T00:00:00.000000Z"
        })
    }

    pub fn user(id: i64, name: &str, role_name: &str) -> serde_json::Value {
        let role_id = if role_name.eq_ignore_ascii_case("paciente") { 3 } else { 2 };
        json!({
            "id_usuario": id,
            "id_rol": role_id,
            "nombre": name,
            "apellido_paterno": "Rojas",
            "apellido_materno": "Vargas",
            "email": format!("{}@clinapp.test", name.to_lowercase()),
            "estado": 1,
            "rol": Self::role(role_id, role_name)
        })
    }

    pub fn patient(id: i64, user_id: i64) -> serde_json::Value {
        json!({
            "id_paciente": id,
            "id_usuario": user_id,
            "ci": "1234567",
            "fecha_nac": "1990-05-20",
            "sexo": "F",
            "telefono": "70000000",
            "email": "paciente@clinapp.test",
            "direccion": "Av. Siempre Viva 742",
            "created_at": "2025-01-01T00:00:00.000000Z",
            "usuario": Self::user(user_id, "Lucia", "paciente")
        })
    }

    pub fn doctor(id: i64, user_id: i64) -> serde_json::Value {
        json!({
            "id_medico": id,
            "id_usuario": user_id,
            "id_especialidad": 1,
            "telefono": "71111111",
            "email": "medico@clinapp.test",
            "usuario": Self::user(user_id, "Ana", "medico"),
            "especialidad": Self::specialty(1, "Cardiología")
        })
    }

    pub fn specialty(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id_especialidad": id,
            "nombre": name,
            "descripcion": null
        })
    }

    pub fn schedule(id: i64, doctor_id: i64, weekday: &str, start: &str, end: &str, status: &str) -> serde_json::Value {
        json!({
            "id_horario": id,
            "id_medico": doctor_id,
            "dia_semana": weekday,
            "hora_inicio": start,
            "hora_fin": end,
            "estado": status
        })
    }

    pub fn appointment(id: i64, doctor_id: i64, date: &str, status: &str) -> serde_json::Value {
        json!({
            "id_cita": id,
            "id_usuario": 10,
            "id_medico": doctor_id,
            "fecha": date,
            "hora_inicio": "09:00",
            "hora_fin": "09:30",
            "estado": status,
            "motivo": "Control",
            "observaciones": null,
            "consultorio": "A-1",
            "created_at": "2025-01-01T00:00:00.000000Z",
            "usuario": Self::user(10, "Lucia", "paciente"),
            "medico": Self::doctor(doctor_id, 20)
        })
    }

    pub fn consultation(id: i64, appointment_id: i64, registered: &str, next_visit: Option<&str>) -> serde_json::Value {
        json!({
            "id_consulta": id,
            "id_cita": appointment_id,
            "id_usuario": 20,
            "id_paciente": 1,
            "motivo": "Dolor de cabeza",
            "diagnostico": "Migraña",
            "tratamiento": "Reposo",
            "indicaciones": null,
            "proxima_cita": next_visit,
            "fecha_registro": registered,
            "analisis": []
        })
    }

    pub fn lab_analysis(id: i64, consultation_id: i64, kind: &str) -> serde_json::Value {
        json!({
            "id_analisis": id,
            "id_consulta": consultation_id,
            "tipo": kind,
            "resultado": null,
            "observaciones": null,
            "fecha": "2025-03-05"
        })
    }

    pub fn error_response(message: &str) -> serde_json::Value {
        json!({
            "message": message,
            "errors": {}
        })
    }
}
