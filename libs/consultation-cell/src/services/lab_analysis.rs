use std::sync::Arc;

use tracing::debug;

use shared_database::{BackendClient, Resource};

use crate::models::{ConsultationError, LabAnalysis, LabAnalysisRequest};

pub const LAB_ANALYSES_PATH: &str = "/api/analisislaboratorio";
pub const LAB_ANALYSES_TAG: &str = "analisislaboratorio";

pub struct LabAnalysisService {
    analyses: Resource<LabAnalysis>,
}

impl LabAnalysisService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            analyses: Resource::new(backend, LAB_ANALYSES_PATH, LAB_ANALYSES_TAG),
        }
    }

    pub async fn list(&self) -> Result<Vec<LabAnalysis>, ConsultationError> {
        Ok(self.analyses.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<LabAnalysis, ConsultationError> {
        Ok(self.analyses.get(id).await?)
    }

    pub async fn create(&self, request: LabAnalysisRequest) -> Result<LabAnalysis, ConsultationError> {
        validate(&request)?;
        debug!("Creating lab analysis '{}' for consultation {}", request.tipo, request.id_consulta);
        Ok(self.analyses.create(&request).await?)
    }

    pub async fn update(&self, id: i64, request: LabAnalysisRequest) -> Result<LabAnalysis, ConsultationError> {
        validate(&request)?;
        debug!("Updating lab analysis {}", id);
        Ok(self.analyses.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ConsultationError> {
        debug!("Deleting lab analysis {}", id);
        Ok(self.analyses.delete(id).await?)
    }
}

fn validate(request: &LabAnalysisRequest) -> Result<(), ConsultationError> {
    if request.tipo.trim().is_empty() {
        return Err(ConsultationError::Validation(
            "El tipo de análisis es requerido".to_string(),
        ));
    }
    Ok(())
}
