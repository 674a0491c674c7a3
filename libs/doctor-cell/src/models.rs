use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::BackendError;
use shared_models::error::AppError;

pub use shared_models::{Doctor, Specialty};

/// Doctor as returned to the dashboard, with its selector label attached.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorView {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub label: String,
}

impl From<Doctor> for DoctorView {
    fn from(doctor: Doctor) -> Self {
        let label = doctor.label();
        Self { doctor, label }
    }
}

/// Create/update payload for `/api/medicos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorRequest {
    #[serde(default)]
    pub id_usuario: Option<i64>,
    #[serde(default)]
    pub id_especialidad: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialtyRequest {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::Validation(msg) => AppError::ValidationError(msg),
            DoctorError::Backend(e) => e.into(),
        }
    }
}
