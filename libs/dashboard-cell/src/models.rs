//! Aggregates served by the backend's `/api/dashboard/*` endpoints.
//!
//! Field names follow the backend's camelCase Spanish keys. Every struct
//! defaults field by field so partial payloads still decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(rename = "totalUsuarios")]
    pub total_users: u64,
    #[serde(rename = "totalCitas")]
    pub total_appointments: u64,
    #[serde(rename = "citasHoy")]
    pub appointments_today: u64,
    #[serde(rename = "citasPendientes")]
    pub pending_appointments: u64,
    #[serde(rename = "totalConsultas")]
    pub total_consultations: u64,
    #[serde(rename = "totalMedicos")]
    pub total_doctors: u64,
    #[serde(rename = "totalEspecialidades")]
    pub total_specialties: u64,
    #[serde(rename = "consultasHoy")]
    pub consultations_today: u64,
    #[serde(rename = "citasConfirmadas")]
    pub confirmed_appointments: u64,
    #[serde(rename = "citasCanceladas")]
    pub cancelled_appointments: u64,
    #[serde(rename = "citasCompletadas")]
    pub completed_appointments: u64,
    #[serde(rename = "pacientesActivos")]
    pub active_patients: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiState {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    #[default]
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServicesState {
    #[default]
    Operational,
    Maintenance,
}

/// Defaults to an all-green status, which is also what the dashboard shows
/// when the backend cannot be reached.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SystemStatus {
    pub api: ApiState,
    pub database: DatabaseState,
    pub services: ServicesState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppointmentStatusCounts {
    #[serde(rename = "confirmadas")]
    pub confirmed: u64,
    #[serde(rename = "pendientes")]
    pub pending: u64,
    #[serde(rename = "canceladas")]
    pub cancelled: u64,
    #[serde(rename = "completadas")]
    pub completed: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsultationPeriodCounts {
    #[serde(rename = "hoy")]
    pub today: u64,
    #[serde(rename = "esteMes")]
    pub this_month: u64,
    #[serde(rename = "esteAnio")]
    pub this_year: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_stats_fill_with_zero() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalUsuarios": 12,
            "citasHoy": 3
        }))
        .unwrap();

        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.appointments_today, 3);
        assert_eq!(stats.total_doctors, 0);
    }

    #[test]
    fn default_status_is_all_green() {
        assert_eq!(
            serde_json::to_value(SystemStatus::default()).unwrap(),
            json!({ "api": "active", "database": "connected", "services": "operational" })
        );
    }
}
