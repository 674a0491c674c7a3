use chrono::NaiveDate;

use shared_utils::dates::{is_in_next_days, is_this_month, is_today};

use crate::models::{Appointment, AppointmentStats, AppointmentStatus};

const UPCOMING_DAYS: i64 = 7;

/// Date-bucket and status counters over a set of appointments.
///
/// Status counters match the stored value exactly, so appointments without
/// a status are not counted as pending.
pub fn compute(appointments: &[Appointment], today: NaiveDate) -> AppointmentStats {
    let dated = |appointment: &&Appointment| appointment.date.is_some();
    let date_of = |appointment: &Appointment| appointment.date.clone().unwrap_or_default();
    let count_status = |status| appointments.iter().filter(|a| a.has_status(status)).count();

    AppointmentStats {
        total: appointments.len(),
        today: appointments
            .iter()
            .filter(dated)
            .filter(|a| is_today(&date_of(a), today))
            .count(),
        this_month: appointments
            .iter()
            .filter(dated)
            .filter(|a| is_this_month(&date_of(a), today))
            .count(),
        confirmed: count_status(AppointmentStatus::Confirmed),
        completed: count_status(AppointmentStatus::Completed),
        cancelled: count_status(AppointmentStatus::Cancelled),
        pending: count_status(AppointmentStatus::Pending),
        upcoming: appointments
            .iter()
            .filter(dated)
            .filter(|a| !a.has_status(AppointmentStatus::Cancelled))
            .filter(|a| is_in_next_days(&date_of(a), UPCOMING_DAYS, today))
            .count(),
    }
}
