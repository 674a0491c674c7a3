use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info};

use shared_database::{BackendClient, Resource};
use shared_utils::dates::{parse_weekday, weekday_name};

use crate::models::{
    AvailabilityQuery, AvailabilityResult, DoctorSchedule, ScheduleError, ScheduleRequest,
    WeeklyAvailabilityWindow, ACTIVE, INACTIVE,
};
use crate::services::checker;

pub const SCHEDULES_PATH: &str = "/api/horariosmedicos";
pub const SCHEDULES_TAG: &str = "horariosmedicos";

static HH_MM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

fn is_hh_mm(value: &str) -> bool {
    HH_MM.is_match(value)
}

/// Source of a doctor's active weekly windows.
///
/// The appointment cell validates requests through this seam so it can be
/// exercised without a backend.
#[async_trait]
pub trait ScheduleLookup: Send + Sync {
    async fn active_windows(&self, doctor_id: i64) -> Result<Vec<WeeklyAvailabilityWindow>, ScheduleError>;
}

pub struct ScheduleService {
    schedules: Resource<DoctorSchedule>,
}

impl ScheduleService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            schedules: Resource::new(backend, SCHEDULES_PATH, SCHEDULES_TAG),
        }
    }

    pub async fn list(&self) -> Result<Vec<DoctorSchedule>, ScheduleError> {
        Ok(self.schedules.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<DoctorSchedule, ScheduleError> {
        Ok(self.schedules.get(id).await?)
    }

    pub async fn create(&self, request: ScheduleRequest) -> Result<DoctorSchedule, ScheduleError> {
        let request = validate(request)?;
        debug!("Creating schedule for doctor {} on {}", request.id_medico, request.dia_semana);

        let created = self.schedules.create(&request).await?;
        info!("Schedule {} created for doctor {}", created.id, created.doctor_id);
        Ok(created)
    }

    pub async fn update(&self, id: i64, request: ScheduleRequest) -> Result<DoctorSchedule, ScheduleError> {
        let request = validate(request)?;
        debug!("Updating schedule {}", id);

        Ok(self.schedules.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ScheduleError> {
        debug!("Deleting schedule {}", id);
        Ok(self.schedules.delete(id).await?)
    }

    /// All schedule rows of one doctor. The backend has no per-doctor
    /// route, so the cached full list is filtered here.
    pub async fn by_doctor(&self, doctor_id: i64) -> Result<Vec<DoctorSchedule>, ScheduleError> {
        let schedules = self.list().await?;
        Ok(schedules
            .into_iter()
            .filter(|schedule| schedule.doctor_id == doctor_id)
            .collect())
    }

    pub async fn check(&self, doctor_id: i64, query: &AvailabilityQuery) -> Result<AvailabilityResult, ScheduleError> {
        let windows = self.active_windows(doctor_id).await?;
        let result = checker::check(&windows, query);
        debug!("Availability for doctor {}: allowed={}", doctor_id, result.allowed);
        Ok(result)
    }
}

#[async_trait]
impl ScheduleLookup for ScheduleService {
    async fn active_windows(&self, doctor_id: i64) -> Result<Vec<WeeklyAvailabilityWindow>, ScheduleError> {
        let schedules = self.by_doctor(doctor_id).await?;
        Ok(first_active_per_day(&schedules))
    }
}

/// The first active row of each weekday, in input order. A row without
/// readable times still claims its weekday, so the day has no window.
pub fn first_active_per_day(schedules: &[DoctorSchedule]) -> Vec<WeeklyAvailabilityWindow> {
    let mut claimed = HashSet::new();
    let mut windows = Vec::new();

    for schedule in schedules.iter().filter(|schedule| schedule.is_active()) {
        let Some(weekday) = schedule.weekday.as_deref().and_then(parse_weekday) else {
            continue;
        };
        if !claimed.insert(weekday) {
            continue;
        }
        match schedule.to_window() {
            Some(window) => windows.push(window),
            None => debug!("Schedule {} has no usable times for {}", schedule.id, weekday_name(weekday)),
        }
    }

    windows
}

/// Normalizes a schedule payload: canonical weekday name, `HH:MM` times
/// with start before end, and a known estado (default "activo").
pub fn validate(request: ScheduleRequest) -> Result<ScheduleRequest, ScheduleError> {
    let weekday = parse_weekday(&request.dia_semana)
        .ok_or_else(|| ScheduleError::Validation(format!("Día de la semana inválido: {}", request.dia_semana)))?;

    let start = request.hora_inicio.trim();
    let end = request.hora_fin.trim();
    for time in [start, end] {
        if !is_hh_mm(time) {
            return Err(ScheduleError::InvalidTime(time.to_string()));
        }
    }

    // Zero-padded HH:MM compares correctly as text
    if start >= end {
        return Err(ScheduleError::Validation(
            "La hora de inicio debe ser anterior a la hora de fin".to_string(),
        ));
    }

    let estado = match request.estado.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => ACTIVE.to_string(),
        Some(s) if s.eq_ignore_ascii_case(ACTIVE) => ACTIVE.to_string(),
        Some(s) if s.eq_ignore_ascii_case(INACTIVE) => INACTIVE.to_string(),
        Some(other) => return Err(ScheduleError::Validation(format!("Estado inválido: {}", other))),
    };

    Ok(ScheduleRequest {
        id_medico: request.id_medico,
        dia_semana: weekday_name(weekday).to_string(),
        hora_inicio: start.to_string(),
        hora_fin: end.to_string(),
        estado: Some(estado),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request(day: &str, start: &str, end: &str, estado: Option<&str>) -> ScheduleRequest {
        ScheduleRequest {
            id_medico: 4,
            dia_semana: day.to_string(),
            hora_inicio: start.to_string(),
            hora_fin: end.to_string(),
            estado: estado.map(String::from),
        }
    }

    #[test]
    fn payload_is_normalized() {
        let normalized = validate(request("miercoles", "08:00", "12:00", None)).unwrap();
        assert_eq!(normalized.dia_semana, "Miércoles");
        assert_eq!(normalized.estado.as_deref(), Some("activo"));

        let inactive = validate(request("Lunes", "08:00", "12:00", Some("INACTIVO"))).unwrap();
        assert_eq!(inactive.estado.as_deref(), Some("inactivo"));
    }

    #[test]
    fn invalid_payloads_are_rejected() {
        assert_matches!(validate(request("Funday", "08:00", "12:00", None)), Err(ScheduleError::Validation(_)));
        assert_matches!(validate(request("Lunes", "8:00", "12:00", None)), Err(ScheduleError::InvalidTime(_)));
        assert_matches!(validate(request("Lunes", "08:00", "24:00", None)), Err(ScheduleError::InvalidTime(_)));
        assert_matches!(validate(request("Lunes", "12:00", "08:00", None)), Err(ScheduleError::Validation(_)));
        assert_matches!(validate(request("Lunes", "08:00", "08:00", None)), Err(ScheduleError::Validation(_)));
        assert_matches!(validate(request("Lunes", "08:00", "12:00", Some("pausado"))), Err(ScheduleError::Validation(_)));
    }

    fn row(id: i64, day: &str, start: Option<&str>, end: Option<&str>, estado: &str) -> DoctorSchedule {
        serde_json::from_value(serde_json::json!({
            "id_horario": id,
            "id_medico": 4,
            "dia_semana": day,
            "hora_inicio": start,
            "hora_fin": end,
            "estado": estado
        }))
        .unwrap()
    }

    #[test]
    fn row_without_times_leaves_its_day_empty() {
        let schedules = vec![
            row(1, "Miércoles", None, Some("12:00"), "activo"),
            row(2, "Miércoles", Some("14:00"), Some("18:00"), "activo"),
            row(3, "Jueves", Some("08:00"), Some("12:00"), "activo"),
        ];

        let windows = first_active_per_day(&schedules);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].weekday, chrono::Weekday::Thu);

        let result = checker::check(
            &windows,
            &AvailabilityQuery::new(
                chrono::NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
                "15:00".parse().unwrap(),
                "16:00".parse().unwrap(),
            ),
        );
        assert_eq!(result.reason.as_deref(), Some("El médico no tiene horario disponible para Miércoles"));
    }

    #[test]
    fn inactive_rows_do_not_claim_a_day() {
        let schedules = vec![
            row(1, "Miércoles", Some("08:00"), Some("10:00"), "inactivo"),
            row(2, "Miércoles", Some("14:00"), Some("18:00"), "activo"),
            row(3, "Miércoles", Some("19:00"), Some("20:00"), "activo"),
        ];

        let windows = first_active_per_day(&schedules);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start_time.to_string(), "14:00");
    }
}
