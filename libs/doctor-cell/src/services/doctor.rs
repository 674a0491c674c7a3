use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{BackendClient, Resource};

use crate::models::{Doctor, DoctorError, DoctorRequest};

pub const DOCTORS_PATH: &str = "/api/medicos";
pub const DOCTORS_TAG: &str = "medicos";

pub struct DoctorService {
    doctors: Resource<Doctor>,
}

impl DoctorService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            doctors: Resource::new(backend, DOCTORS_PATH, DOCTORS_TAG),
        }
    }

    pub async fn list(&self) -> Result<Vec<Doctor>, DoctorError> {
        Ok(self.doctors.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Doctor, DoctorError> {
        Ok(self.doctors.get(id).await?)
    }

    pub async fn create(&self, request: DoctorRequest) -> Result<Doctor, DoctorError> {
        validate(&request)?;
        debug!("Creating doctor for user {:?}", request.id_usuario);

        let created = self.doctors.create(&request).await?;
        info!("Doctor {} created", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: i64, request: DoctorRequest) -> Result<Doctor, DoctorError> {
        validate(&request)?;
        debug!("Updating doctor {}", id);

        Ok(self.doctors.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DoctorError> {
        debug!("Deleting doctor {}", id);
        Ok(self.doctors.delete(id).await?)
    }
}

fn validate(request: &DoctorRequest) -> Result<(), DoctorError> {
    if request.id_usuario.is_none() {
        return Err(DoctorError::Validation("El usuario es requerido".to_string()));
    }
    if request.id_especialidad.is_none() {
        return Err(DoctorError::Validation("La especialidad es requerida".to_string()));
    }
    Ok(())
}
