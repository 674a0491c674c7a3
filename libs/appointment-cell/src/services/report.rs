use askama::Template;
use shared_utils::dates::format_date;

use crate::models::{Appointment, ReportRow};

/// Appointments whose patient names, doctor names or status contain
/// `filter` (case-insensitive). A blank filter keeps everything.
pub fn filter<'a>(appointments: &'a [Appointment], filter: &str) -> Vec<&'a Appointment> {
    let needle = filter.trim().to_lowercase();
    appointments
        .iter()
        .filter(|appointment| needle.is_empty() || matches_filter(appointment, &needle))
        .collect()
}

fn matches_filter(appointment: &Appointment, needle: &str) -> bool {
    let contains = |value: Option<&str>| value.map_or(false, |v| v.to_lowercase().contains(needle));

    let patient = appointment.patient();
    let doctor = appointment.doctor_user();

    contains(patient.map(|u| u.first_name.as_str()))
        || contains(patient.and_then(|u| u.paternal_surname.as_deref()))
        || contains(patient.and_then(|u| u.maternal_surname.as_deref()))
        || contains(doctor.map(|u| u.first_name.as_str()))
        || contains(doctor.and_then(|u| u.paternal_surname.as_deref()))
        || contains(doctor.and_then(|u| u.maternal_surname.as_deref()))
        || contains(appointment.status.as_deref())
}

pub fn row(appointment: &Appointment) -> ReportRow {
    let or = |value: &Option<String>, fallback: &str| {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    };

    ReportRow {
        id: appointment.id,
        patient: appointment.patient_name(),
        doctor: appointment.doctor_name(),
        date: format_date(appointment.date.as_deref()),
        schedule: appointment.schedule_label(),
        status: appointment.status_or_default().to_string(),
        reason: or(&appointment.reason, "Sin motivo"),
        room: or(&appointment.room, "No asignado"),
    }
}

pub fn build(appointments: &[Appointment], filter_text: &str) -> Vec<ReportRow> {
    filter(appointments, filter_text).into_iter().map(row).collect()
}

/// Standalone printable page with the report table.
#[derive(Template)]
#[template(path = "appointments/report.html")]
pub struct ReportTemplate {
    pub rows: Vec<ReportRow>,
    pub filter: String,
    pub total: usize,
}

impl ReportTemplate {
    pub fn new(rows: Vec<ReportRow>, filter_text: &str) -> Self {
        let total = rows.len();
        Self {
            rows,
            filter: filter_text.trim().to_string(),
            total,
        }
    }
}
