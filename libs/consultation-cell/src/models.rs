use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::BackendError;
use shared_models::{error::AppError, Patient, User};

// ==============================================================================
// CONSULTATIONS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    #[serde(rename = "id_consulta")]
    pub id: i64,
    #[serde(rename = "id_cita", default)]
    pub appointment_id: Option<i64>,
    #[serde(rename = "id_usuario", default)]
    pub user_id: Option<i64>,
    #[serde(rename = "id_paciente", default)]
    pub patient_id: Option<i64>,
    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,
    #[serde(rename = "diagnostico", default)]
    pub diagnosis: Option<String>,
    #[serde(rename = "tratamiento", default)]
    pub treatment: Option<String>,
    #[serde(rename = "indicaciones", default)]
    pub instructions: Option<String>,
    #[serde(rename = "proxima_cita", default)]
    pub next_visit: Option<String>,
    #[serde(rename = "fecha_registro", default)]
    pub registered_at: Option<String>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(rename = "paciente", default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<Patient>,
    #[serde(rename = "analisis", default)]
    pub analyses: Vec<LabAnalysis>,
}

/// Create/update payload. Optional text fields are sent as explicit nulls
/// so an update can clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsultationRequest {
    #[serde(default)]
    pub id_cita: Option<i64>,
    #[serde(default)]
    pub id_usuario: Option<i64>,
    #[serde(default)]
    pub id_paciente: Option<i64>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default)]
    pub diagnostico: Option<String>,
    #[serde(default)]
    pub tratamiento: Option<String>,
    #[serde(default)]
    pub indicaciones: Option<String>,
    #[serde(default)]
    pub proxima_cita: Option<String>,
    #[serde(default)]
    pub analisis: Vec<LabAnalysisInput>,
}

/// Lab analysis nested in a consultation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabAnalysisInput {
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub resultado: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
}

impl LabAnalysisInput {
    pub fn has_type(&self) -> bool {
        self.tipo.as_deref().map_or(false, |t| !t.trim().is_empty())
    }
}

// ==============================================================================
// LAB ANALYSES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabAnalysis {
    #[serde(rename = "id_analisis")]
    pub id: i64,
    #[serde(rename = "id_consulta")]
    pub consultation_id: i64,
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    #[serde(rename = "resultado", default)]
    pub result: Option<String>,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
    #[serde(rename = "fecha", default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabAnalysisRequest {
    pub id_consulta: i64,
    pub tipo: String,
    #[serde(default)]
    pub resultado: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
}

/// Entry of the predefined lab test catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LabTestType {
    pub id: &'static str,
    #[serde(rename = "nombre")]
    pub name: &'static str,
    #[serde(rename = "categoria")]
    pub category: &'static str,
    #[serde(rename = "descripcion")]
    pub description: &'static str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

// ==============================================================================
// STATISTICS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsultationStats {
    pub total: usize,
    pub with_analyses: usize,
    pub this_month: usize,
    pub upcoming_follow_ups: usize,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum ConsultationError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<ConsultationError> for AppError {
    fn from(err: ConsultationError) -> Self {
        match err {
            ConsultationError::Validation(msg) => AppError::ValidationError(msg),
            ConsultationError::Backend(e) => e.into(),
        }
    }
}
