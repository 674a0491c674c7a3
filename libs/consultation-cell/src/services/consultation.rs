use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{BackendClient, Resource};

use crate::models::{Consultation, ConsultationError, ConsultationRequest};

pub const CONSULTATIONS_PATH: &str = "/api/consultas";
pub const CONSULTATIONS_TAG: &str = "consultas";

pub struct ConsultationService {
    consultations: Resource<Consultation>,
}

impl ConsultationService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            consultations: Resource::new(backend, CONSULTATIONS_PATH, CONSULTATIONS_TAG),
        }
    }

    pub async fn list(&self) -> Result<Vec<Consultation>, ConsultationError> {
        Ok(self.consultations.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Consultation, ConsultationError> {
        Ok(self.consultations.get(id).await?)
    }

    pub async fn create(&self, request: ConsultationRequest) -> Result<Consultation, ConsultationError> {
        let request = without_untyped_analyses(request);
        debug!(
            "Creating consultation for appointment {:?} with {} analyses",
            request.id_cita,
            request.analisis.len()
        );

        let created = self.consultations.create(&request).await?;
        info!("Consultation {} created", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: i64, request: ConsultationRequest) -> Result<Consultation, ConsultationError> {
        let request = without_untyped_analyses(request);
        debug!("Updating consultation {}", id);

        Ok(self.consultations.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ConsultationError> {
        debug!("Deleting consultation {}", id);
        Ok(self.consultations.delete(id).await?)
    }

    /// Consultations recorded for one appointment, cached under the
    /// consultations tag so any consultation mutation refreshes it.
    pub async fn by_appointment(&self, appointment_id: i64) -> Result<Vec<Consultation>, ConsultationError> {
        let path = format!("{}/cita/{}", CONSULTATIONS_PATH, appointment_id);
        Ok(self
            .consultations
            .client()
            .get_cached(&path, CONSULTATIONS_TAG, None)
            .await?)
    }
}

/// Blank rows of the nested analyses form are dropped before sending.
fn without_untyped_analyses(mut request: ConsultationRequest) -> ConsultationRequest {
    request.analisis.retain(|analysis| analysis.has_type());
    request
}
