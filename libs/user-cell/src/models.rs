use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::BackendError;
use shared_models::error::AppError;

pub use shared_models::{Role, User};

/// Role name that marks a user as a patient.
pub const PATIENT_ROLE: &str = "paciente";

/// Create/update payload for `/api/usuarios`.
///
/// `confirm_password` is only checked here and never forwarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido_paterno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing)]
    pub confirm_password: Option<String>,
    #[serde(default)]
    pub id_rol: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequest {
    pub nombre: String,
}

#[derive(Error, Debug)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(msg) => AppError::ValidationError(msg),
            UserError::Backend(e) => e.into(),
        }
    }
}
