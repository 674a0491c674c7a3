use chrono::Datelike;

use shared_utils::dates::weekday_name;

use crate::models::{AvailabilityQuery, AvailabilityResult, RejectionKind, WeeklyAvailabilityWindow};

/// Decides whether a requested slot fits the doctor's weekly availability.
///
/// Rules, in order:
/// 1. date and both times must be present;
/// 2. there must be an active window on the date's weekday;
/// 3. the first such window (input order) must contain the request, bounds inclusive;
/// 4. the start must be strictly before the end.
///
/// Every failure is a rejected result carrying a display reason; this never errors.
pub fn check(windows: &[WeeklyAvailabilityWindow], query: &AvailabilityQuery) -> AvailabilityResult {
    let (date, start, end) = match (query.date, query.requested_start, query.requested_end) {
        (Some(date), Some(start), Some(end)) => (date, start, end),
        _ => {
            return AvailabilityResult::rejected(
                RejectionKind::IncompleteRequest,
                "Fecha y horas son requeridas",
            )
        }
    };

    let weekday = date.weekday();

    let Some(window) = windows
        .iter()
        .find(|window| window.active && window.weekday == weekday)
    else {
        return AvailabilityResult::rejected(
            RejectionKind::NoAvailability,
            format!("El médico no tiene horario disponible para {}", weekday_name(weekday)),
        );
    };

    if start < window.start_time || end > window.end_time {
        return AvailabilityResult::rejected(
            RejectionKind::OutsideWindow,
            format!("El horario debe estar entre {} y {}", window.start_time, window.end_time),
        );
    }

    if start >= end {
        return AvailabilityResult::rejected(
            RejectionKind::StartNotBeforeEnd,
            "La hora de inicio debe ser anterior a la hora de fin",
        );
    }

    AvailabilityResult::allowed()
}
