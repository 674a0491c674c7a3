use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::BackendError;
use shared_models::error::AppError;
use shared_utils::dates::{parse_date, parse_weekday};

// ==============================================================================
// TIME OF DAY
// ==============================================================================

/// Time of day with minute precision, read from `HH:MM` or `HH:MM:SS`
/// and always rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .ok()
            .and_then(|time| Self::new(time.hour(), time.minute()))
            .ok_or_else(|| ScheduleError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

// ==============================================================================
// AVAILABILITY CHECK TYPES
// ==============================================================================

/// One recurring weekly slot in which a doctor sees patients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyAvailabilityWindow {
    pub weekday: Weekday,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub date: Option<NaiveDate>,
    pub requested_start: Option<ClockTime>,
    pub requested_end: Option<ClockTime>,
}

impl AvailabilityQuery {
    pub fn new(date: NaiveDate, requested_start: ClockTime, requested_end: ClockTime) -> Self {
        Self {
            date: Some(date),
            requested_start: Some(requested_start),
            requested_end: Some(requested_end),
        }
    }

    /// Builds a query from form values. Blank values count as missing;
    /// values that are present but malformed are rejected.
    pub fn from_raw(date: Option<&str>, start: Option<&str>, end: Option<&str>) -> Result<Self, ScheduleError> {
        let date = match non_blank(date) {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| ScheduleError::InvalidDate(raw.to_string()))?),
            None => None,
        };

        Ok(Self {
            date,
            requested_start: non_blank(start).map(str::parse::<ClockTime>).transpose()?,
            requested_end: non_blank(end).map(str::parse::<ClockTime>).transpose()?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    IncompleteRequest,
    NoAvailability,
    OutsideWindow,
    StartNotBeforeEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<RejectionKind>,
}

impl AvailabilityResult {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
            rejection: None,
        }
    }

    pub fn rejected(kind: RejectionKind, reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            rejection: Some(kind),
        }
    }
}

// ==============================================================================
// BACKEND RECORDS
// ==============================================================================

pub const ACTIVE: &str = "activo";
pub const INACTIVE: &str = "inactivo";

/// Doctor schedule row as stored by the backend (`/api/horariosmedicos`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorSchedule {
    #[serde(rename = "id_horario")]
    pub id: i64,
    #[serde(rename = "id_medico")]
    pub doctor_id: i64,
    #[serde(rename = "dia_semana", default)]
    pub weekday: Option<String>,
    #[serde(rename = "hora_inicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "hora_fin", default)]
    pub end_time: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
}

impl DoctorSchedule {
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map(|status| status.trim().eq_ignore_ascii_case(ACTIVE))
            .unwrap_or(false)
    }

    /// `None` when the weekday or either time is missing or unreadable.
    pub fn to_window(&self) -> Option<WeeklyAvailabilityWindow> {
        Some(WeeklyAvailabilityWindow {
            weekday: parse_weekday(self.weekday.as_deref()?)?,
            start_time: self.start_time.as_deref()?.parse().ok()?,
            end_time: self.end_time.as_deref()?.parse().ok()?,
            active: self.is_active(),
        })
    }
}

/// Payload for creating or replacing a schedule row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub id_medico: i64,
    pub dia_semana: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckAvailabilityRequest {
    pub fecha: Option<String>,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Hora inválida: {0}")]
    InvalidTime(String),

    #[error("Fecha inválida: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::Backend(e) => e.into(),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn clock_time_accepts_seconds_and_drops_them() {
        let time: ClockTime = "08:30:45".parse().unwrap();
        assert_eq!(time.to_string(), "08:30");
        assert_eq!(time, ClockTime::new(8, 30).unwrap());
        assert_matches!("8h".parse::<ClockTime>(), Err(ScheduleError::InvalidTime(_)));
    }

    #[test]
    fn schedule_rows_become_windows() {
        let row = DoctorSchedule {
            id: 1,
            doctor_id: 4,
            weekday: Some("Miércoles".to_string()),
            start_time: Some("08:00:00".to_string()),
            end_time: Some("12:00".to_string()),
            status: Some("Activo".to_string()),
        };

        let window = row.to_window().unwrap();
        assert_eq!(window.weekday, Weekday::Wed);
        assert_eq!(window.start_time.to_string(), "08:00");
        assert!(window.active);

        let without_end = DoctorSchedule { end_time: None, ..row };
        assert!(without_end.to_window().is_none());
    }

    #[test]
    fn blank_form_values_are_missing() {
        let query = AvailabilityQuery::from_raw(Some(""), Some("09:00"), None).unwrap();
        assert_eq!(query.date, None);
        assert_eq!(query.requested_start, ClockTime::new(9, 0));
        assert_eq!(query.requested_end, None);

        assert_matches!(
            AvailabilityQuery::from_raw(Some("05/03/2025"), None, None),
            Err(ScheduleError::InvalidDate(_))
        );
    }
}
