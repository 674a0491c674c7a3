use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::{BackendClient, Resource};

use crate::models::{User, UserError, UserRequest, PATIENT_ROLE};
use crate::services::RoleService;

pub const USERS_PATH: &str = "/api/usuarios";
pub const USERS_TAG: &str = "usuarios";

pub struct UserService {
    users: Resource<User>,
    roles: RoleService,
}

impl UserService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            users: Resource::new(backend.clone(), USERS_PATH, USERS_TAG),
            roles: RoleService::new(backend),
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<User, UserError> {
        Ok(self.users.get(id).await?)
    }

    pub async fn create(&self, request: UserRequest) -> Result<User, UserError> {
        let request = validate(request, true)?;
        debug!("Creating user {} with role {:?}", request.nombre, request.id_rol);

        let created = self.users.create(&request).await?;
        info!("User {} created", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: i64, request: UserRequest) -> Result<User, UserError> {
        let request = validate(request, false)?;
        debug!("Updating user {}", id);

        Ok(self.users.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), UserError> {
        debug!("Deleting user {}", id);
        Ok(self.users.delete(id).await?)
    }

    /// Users holding the patient role, used to pick the account behind a
    /// new patient record. Without a role named "paciente" every user is
    /// returned.
    pub async fn patient_users(&self) -> Result<Vec<User>, UserError> {
        let roles = self.roles.list().await?;
        let users = self.list().await?;

        let Some(patient_role) = roles
            .iter()
            .find(|role| role.name.trim().eq_ignore_ascii_case(PATIENT_ROLE))
        else {
            warn!("No {} role found, listing every user", PATIENT_ROLE);
            return Ok(users);
        };

        Ok(users
            .into_iter()
            .filter(|user| user.role_id == patient_role.id)
            .collect())
    }
}

/// Checks the required fields. A blank password on update means "keep the
/// current one" and is dropped from the payload.
pub fn validate(mut request: UserRequest, creating: bool) -> Result<UserRequest, UserError> {
    if request.nombre.trim().is_empty() {
        return Err(UserError::Validation("El nombre es requerido".to_string()));
    }
    if request.id_rol.is_none() {
        return Err(UserError::Validation("El rol es requerido".to_string()));
    }

    request.password = request.password.filter(|p| !p.is_empty());
    match (&request.password, &request.confirm_password) {
        (None, _) if creating => {
            return Err(UserError::Validation("La contraseña es requerida".to_string()));
        }
        (Some(password), Some(confirm)) if !confirm.is_empty() && password != confirm => {
            return Err(UserError::Validation("Las contraseñas no coinciden".to_string()));
        }
        _ => {}
    }

    Ok(request)
}
