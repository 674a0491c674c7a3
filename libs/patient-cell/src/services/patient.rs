use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{BackendClient, Resource};
use shared_utils::dates::parse_date;

use crate::models::{Patient, PatientError, PatientRequest, SEX_OPTIONS};

pub const PATIENTS_PATH: &str = "/api/pacientes";
pub const PATIENTS_TAG: &str = "pacientes";

pub struct PatientService {
    patients: Resource<Patient>,
}

impl PatientService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            patients: Resource::new(backend, PATIENTS_PATH, PATIENTS_TAG),
        }
    }

    pub async fn list(&self) -> Result<Vec<Patient>, PatientError> {
        Ok(self.patients.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Patient, PatientError> {
        Ok(self.patients.get(id).await?)
    }

    pub async fn create(&self, request: PatientRequest) -> Result<Patient, PatientError> {
        let request = validate(request)?;
        debug!("Creating patient for user {:?}", request.id_usuario);

        let created = self.patients.create(&request).await?;
        info!("Patient {} created", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: i64, request: PatientRequest) -> Result<Patient, PatientError> {
        let request = validate(request)?;
        debug!("Updating patient {}", id);

        Ok(self.patients.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), PatientError> {
        debug!("Deleting patient {}", id);
        Ok(self.patients.delete(id).await?)
    }
}

/// Blank optional fields are treated as absent.
pub fn validate(mut request: PatientRequest) -> Result<PatientRequest, PatientError> {
    if request.id_usuario.is_none() {
        return Err(PatientError::Validation("El usuario es requerido".to_string()));
    }

    for field in [
        &mut request.ci,
        &mut request.fecha_nac,
        &mut request.sexo,
        &mut request.telefono,
        &mut request.email,
        &mut request.direccion,
    ] {
        if field.as_deref().map_or(false, |value| value.trim().is_empty()) {
            *field = None;
        }
    }

    if let Some(birth_date) = &request.fecha_nac {
        if parse_date(birth_date).is_none() {
            return Err(PatientError::Validation("Fecha de nacimiento inválida".to_string()));
        }
    }
    if let Some(sex) = &request.sexo {
        if !SEX_OPTIONS.contains(&sex.as_str()) {
            return Err(PatientError::Validation(format!("Sexo no válido: {}", sex)));
        }
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PatientRequest {
        PatientRequest {
            id_usuario: Some(10),
            fecha_nac: Some("1990-05-20".to_string()),
            sexo: Some("Femenino".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn user_is_required() {
        let missing = PatientRequest { id_usuario: None, ..request() };
        assert!(matches!(validate(missing), Err(PatientError::Validation(m)) if m == "El usuario es requerido"));
    }

    #[test]
    fn blank_fields_are_dropped() {
        let blank = PatientRequest {
            ci: Some("".to_string()),
            fecha_nac: Some("  ".to_string()),
            ..request()
        };
        let validated = validate(blank).unwrap();
        assert_eq!(validated.ci, None);
        assert_eq!(validated.fecha_nac, None);
    }

    #[test]
    fn birth_date_and_sex_are_checked() {
        let bad_date = PatientRequest { fecha_nac: Some("20/05/1990".to_string()), ..request() };
        assert!(matches!(validate(bad_date), Err(PatientError::Validation(_))));

        let bad_sex = PatientRequest { sexo: Some("F".to_string()), ..request() };
        assert!(matches!(validate(bad_sex), Err(PatientError::Validation(m)) if m == "Sexo no válido: F"));
    }
}
