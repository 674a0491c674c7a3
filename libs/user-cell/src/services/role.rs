use std::sync::Arc;

use tracing::debug;

use shared_database::{BackendClient, Resource};

use crate::models::{Role, RoleRequest, UserError};

pub const ROLES_PATH: &str = "/api/roles";
pub const ROLES_TAG: &str = "roles";

pub struct RoleService {
    roles: Resource<Role>,
}

impl RoleService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self {
            roles: Resource::new(backend, ROLES_PATH, ROLES_TAG),
        }
    }

    pub async fn list(&self) -> Result<Vec<Role>, UserError> {
        Ok(self.roles.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Role, UserError> {
        Ok(self.roles.get(id).await?)
    }

    pub async fn create(&self, request: RoleRequest) -> Result<Role, UserError> {
        validate(&request)?;
        debug!("Creating role {}", request.nombre);
        Ok(self.roles.create(&request).await?)
    }

    pub async fn update(&self, id: i64, request: RoleRequest) -> Result<Role, UserError> {
        validate(&request)?;
        debug!("Updating role {}", id);
        Ok(self.roles.update(id, &request).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), UserError> {
        debug!("Deleting role {}", id);
        Ok(self.roles.delete(id).await?)
    }
}

fn validate(request: &RoleRequest) -> Result<(), UserError> {
    if request.nombre.trim().is_empty() {
        return Err(UserError::Validation("El nombre del rol es requerido".to_string()));
    }
    Ok(())
}
