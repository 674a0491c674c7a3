use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use schedule_cell::{RejectionKind, ScheduleError};
use shared_database::BackendError;
use shared_models::{error::AppError, Doctor, User};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Appointment (`cita`) as returned by `/api/citas`.
///
/// Status stays a plain string so values this service does not know about
/// still round-trip; use [`Appointment::status`] for the typed view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    #[serde(rename = "id_cita")]
    pub id: i64,
    #[serde(rename = "id_usuario")]
    pub user_id: i64,
    #[serde(rename = "id_medico", default)]
    pub doctor_id: Option<i64>,
    #[serde(rename = "fecha", default)]
    pub date: Option<String>,
    #[serde(rename = "hora_inicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "hora_fin", default)]
    pub end_time: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
    #[serde(rename = "consultorio", default)]
    pub room: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(rename = "paciente_usuario", default, skip_serializing_if = "Option::is_none")]
    pub patient_user: Option<User>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(rename = "medico", default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<Doctor>,
}

impl Appointment {
    /// Raw status, "pendiente" when the backend sent none.
    pub fn status_or_default(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(AppointmentStatus::Pending.as_str())
    }

    pub fn status(&self) -> Option<AppointmentStatus> {
        self.status_or_default().parse().ok()
    }

    pub fn has_status(&self, status: AppointmentStatus) -> bool {
        self.status.as_deref() == Some(status.as_str())
    }

    /// The user the appointment was booked for.
    pub fn patient(&self) -> Option<&User> {
        self.patient_user.as_ref().or(self.user.as_ref())
    }

    pub fn patient_name(&self) -> String {
        self.patient()
            .map(User::full_name)
            .unwrap_or_else(|| "Sin paciente".to_string())
    }

    pub fn doctor_user(&self) -> Option<&User> {
        self.doctor.as_ref().and_then(|doctor| doctor.user.as_ref())
    }

    pub fn doctor_name(&self) -> String {
        self.doctor_user()
            .map(User::full_name)
            .unwrap_or_else(|| "Sin médico".to_string())
    }

    /// "HH:MM - HH:MM", or "Sin horario" when either end is missing.
    pub fn schedule_label(&self) -> String {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => format!("{} - {}", start, end),
            _ => "Sin horario".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "en_curso")]
    InProgress,
    #[serde(rename = "completada")]
    Completed,
    #[serde(rename = "cancelada")]
    Cancelled,
    #[serde(rename = "no_asistio")]
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pendiente",
            AppointmentStatus::Confirmed => "confirmada",
            AppointmentStatus::InProgress => "en_curso",
            AppointmentStatus::Completed => "completada",
            AppointmentStatus::Cancelled => "cancelada",
            AppointmentStatus::NoShow => "no_asistio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pendiente",
            AppointmentStatus::Confirmed => "Confirmada",
            AppointmentStatus::InProgress => "En Curso",
            AppointmentStatus::Completed => "Completada",
            AppointmentStatus::Cancelled => "Cancelada",
            AppointmentStatus::NoShow => "No Asistió",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppointmentError::InvalidStatus(wanted.to_string()))
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub id_usuario: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_medico: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hora_inicio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hora_fin: Option<String>,
    #[serde(default)]
    pub estado: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultorio: Option<String>,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_medico: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hora_inicio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hora_fin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<AppointmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultorio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeStatusRequest {
    pub estado: AppointmentStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

// ==============================================================================
// STATISTICS & REPORT
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentStats {
    pub total: usize,
    pub today: usize,
    pub this_month: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub pending: usize,
    pub upcoming: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRow {
    pub id: i64,
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub schedule: String,
    pub status: String,
    pub reason: String,
    pub room: String,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("{reason}")]
    Unavailable { kind: RejectionKind, reason: String },

    #[error("El estado no ha cambiado")]
    StatusUnchanged,

    #[error("Estado de cita inválido: {0}")]
    InvalidStatus(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::Schedule(e) => e.into(),
            AppointmentError::Backend(e) => e.into(),
            AppointmentError::StatusUnchanged => AppError::Conflict("El estado no ha cambiado".to_string()),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}
