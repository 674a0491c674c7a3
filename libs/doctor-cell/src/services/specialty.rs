use std::sync::Arc;

use tracing::debug;

use shared_database::{BackendClient, Resource};

use crate::models::{DoctorError, Specialty, SpecialtyRequest};

pub const SPECIALTIES_PATH: &str = "/api/especialidades";
pub const SPECIALTIES_TAG: &str = "especialidades";

pub struct SpecialtyService {
    specialties: Resource<Specialty>,
}

impl SpecialtyService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            specialties: Resource::new(backend, SPECIALTIES_PATH, SPECIALTIES_TAG),
        }
    }

    pub async fn list(&self) -> Result<Vec<Specialty>, DoctorError> {
        Ok(self.specialties.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Specialty, DoctorError> {
        Ok(self.specialties.get(id).await?)
    }

    pub async fn create(&self, request: SpecialtyRequest) -> Result<Specialty, DoctorError> {
        validate(&request)?;
        debug!("Creating specialty {}", request.nombre);
        Ok(self.specialties.create(&request).await?)
    }

    pub async fn update(&self, id: i64, request: SpecialtyRequest) -> Result<Specialty, DoctorError> {
        validate(&request)?;
        debug!("Updating specialty {}", id);
        Ok(self.specialties.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DoctorError> {
        debug!("Deleting specialty {}", id);
        Ok(self.specialties.delete(id).await?)
    }
}

fn validate(request: &SpecialtyRequest) -> Result<(), DoctorError> {
    if request.nombre.trim().is_empty() {
        return Err(DoctorError::Validation(
            "El nombre de la especialidad es requerido".to_string(),
        ));
    }
    Ok(())
}
