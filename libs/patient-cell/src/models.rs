use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::BackendError;
use shared_models::error::AppError;

pub use shared_models::Patient;

/// Values offered for `sexo` by the patient form.
pub const SEX_OPTIONS: [&str; 3] = ["Masculino", "Femenino", "Otro"];

/// Create/update payload for `/api/pacientes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientRequest {
    #[serde(default)]
    pub id_usuario: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
}

#[derive(Error, Debug)]
pub enum PatientError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::Validation(msg) => AppError::ValidationError(msg),
            PatientError::Backend(e) => e.into(),
        }
    }
}
