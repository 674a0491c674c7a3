use std::sync::Arc;

use tracing::{debug, info};

use schedule_cell::{check, AvailabilityQuery, RejectionKind, ScheduleLookup, ScheduleService};
use shared_database::{BackendClient, Resource};

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, CreateAppointmentRequest,
    UpdateAppointmentRequest,
};

pub const APPOINTMENTS_PATH: &str = "/api/citas";
pub const APPOINTMENTS_TAG: &str = "citas";

pub struct AppointmentService {
    appointments: Resource<Appointment>,
    schedules: Arc<dyn ScheduleLookup>,
}

impl AppointmentService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        let schedules = Arc::new(ScheduleService::new(Arc::clone(&backend)));
        Self::with_schedule_lookup(backend, schedules)
    }

    pub fn with_schedule_lookup(backend: Arc<BackendClient>, schedules: Arc<dyn ScheduleLookup>) -> Self {
        Self {
            appointments: Resource::new(backend, APPOINTMENTS_PATH, APPOINTMENTS_TAG),
            schedules,
        }
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.appointments.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Appointment, AppointmentError> {
        Ok(self.appointments.get(id).await?)
    }

    pub async fn create(&self, request: CreateAppointmentRequest) -> Result<Appointment, AppointmentError> {
        debug!("Creating appointment for user {}", request.id_usuario);

        self.validate_slot(
            request.id_medico,
            request.fecha.as_deref(),
            request.hora_inicio.as_deref(),
            request.hora_fin.as_deref(),
        )
        .await?;

        let created = self.appointments.create(&request).await?;
        info!("Appointment {} created with status {}", created.id, created.status_or_default());
        Ok(created)
    }

    pub async fn update(&self, id: i64, request: UpdateAppointmentRequest) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment {}", id);

        self.validate_slot(
            request.id_medico,
            request.fecha.as_deref(),
            request.hora_inicio.as_deref(),
            request.hora_fin.as_deref(),
        )
        .await?;

        Ok(self.appointments.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppointmentError> {
        debug!("Deleting appointment {}", id);
        Ok(self.appointments.delete(id).await?)
    }

    /// Moves an appointment to `status`. Re-applying the current status is
    /// refused so no empty update reaches the backend.
    pub async fn change_status(&self, id: i64, status: AppointmentStatus) -> Result<Appointment, AppointmentError> {
        let current = self.get(id).await?;

        if current.status_or_default() == status.as_str() {
            return Err(AppointmentError::StatusUnchanged);
        }

        let request = UpdateAppointmentRequest {
            estado: Some(status),
            ..Default::default()
        };

        let updated = self.appointments.update(id, &request).await?;
        info!(
            "Appointment {} moved from {} to {}",
            id,
            current.status_or_default(),
            status
        );
        Ok(updated)
    }

    /// Runs the availability check when doctor, date and both times are
    /// given; partial requests are left to the backend.
    async fn validate_slot(
        &self,
        doctor_id: Option<i64>,
        date: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<(), AppointmentError> {
        let present = |value: Option<&str>| value.map_or(false, |v| !v.trim().is_empty());

        let Some(doctor_id) = doctor_id else {
            return Ok(());
        };
        if !(present(date) && present(start) && present(end)) {
            return Ok(());
        }

        let query = AvailabilityQuery::from_raw(date, start, end)?;
        let windows = self.schedules.active_windows(doctor_id).await?;
        let result = check(&windows, &query);

        if result.allowed {
            return Ok(());
        }

        let reason = result.reason.unwrap_or_default();
        debug!("Appointment slot rejected for doctor {}: {}", doctor_id, reason);

        Err(AppointmentError::Unavailable {
            kind: result.rejection.unwrap_or(RejectionKind::IncompleteRequest),
            reason,
        })
    }
}
