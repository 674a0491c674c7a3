//! Clinic entities shared between cells.
//!
//! The backend speaks Spanish snake_case field names; they are kept on the
//! wire through serde renames while the Rust side uses English names.
//! Relations (`rol`, `usuario`, `especialidad`) are only present when the
//! backend eager-loads them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "id_usuario")]
    pub id: i64,
    #[serde(rename = "id_rol")]
    pub role_id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido_paterno", default)]
    pub paternal_surname: Option<String>,
    #[serde(rename = "apellido_materno", default)]
    pub maternal_surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<i64>,
    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl User {
    /// First name and both surnames, skipping the empty ones.
    pub fn full_name(&self) -> String {
        full_name(
            Some(self.first_name.as_str()),
            self.paternal_surname.as_deref(),
            self.maternal_surname.as_deref(),
        )
    }
}

/// Joins the non-empty name parts with single spaces.
pub fn full_name(first: Option<&str>, paternal: Option<&str>, maternal: Option<&str>) -> String {
    [first, paternal, maternal]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specialty {
    #[serde(rename = "id_especialidad")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    #[serde(rename = "id_medico")]
    pub id: i64,
    #[serde(rename = "id_usuario")]
    pub user_id: i64,
    #[serde(rename = "id_especialidad", default)]
    pub specialty_id: Option<i64>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(rename = "especialidad", default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
}

impl Doctor {
    /// Display label used in selectors, e.g. "Ana Pérez - Cardiología".
    pub fn label(&self) -> String {
        let name = self
            .user
            .as_ref()
            .map(User::full_name)
            .unwrap_or_else(|| format!("Médico #{}", self.id));

        match &self.specialty {
            Some(specialty) => format!("{} - {}", name, specialty.name),
            None => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    #[serde(rename = "id_paciente")]
    pub id: i64,
    #[serde(rename = "id_usuario")]
    pub user_id: i64,
    #[serde(default)]
    pub ci: Option<String>,
    #[serde(rename = "fecha_nac", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "sexo", default)]
    pub sex: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, paternal: Option<&str>, maternal: Option<&str>) -> User {
        User {
            id: 1,
            role_id: 2,
            first_name: first.to_string(),
            paternal_surname: paternal.map(String::from),
            maternal_surname: maternal.map(String::from),
            email: None,
            status: Some(1),
            role: None,
        }
    }

    #[test]
    fn full_name_skips_missing_parts() {
        assert_eq!(user("Ana", Some("Pérez"), Some("Gil")).full_name(), "Ana Pérez Gil");
        assert_eq!(user("Ana", None, Some("Gil")).full_name(), "Ana Gil");
        assert_eq!(user("Ana", Some("  "), None).full_name(), "Ana");
    }

    #[test]
    fn user_reads_backend_field_names() {
        let json = serde_json::json!({
            "id_usuario": 7,
            "id_rol": 3,
            "nombre": "Luis",
            "apellido_paterno": "Rojas",
            "email": "luis@clinapp.test",
            "estado": 1,
            "rol": { "id": 3, "nombre": "Paciente" }
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.maternal_surname, None);
        assert_eq!(user.role.map(|role| role.name), Some("Paciente".to_string()));
    }

    #[test]
    fn doctor_label_includes_specialty() {
        let doctor = Doctor {
            id: 4,
            user_id: 7,
            specialty_id: Some(1),
            phone: None,
            email: None,
            user: Some(user("Ana", Some("Pérez"), None)),
            specialty: Some(Specialty {
                id: 1,
                name: "Cardiología".to_string(),
                description: None,
            }),
        };
        assert_eq!(doctor.label(), "Ana Pérez - Cardiología");

        let bare = Doctor { user: None, specialty: None, ..doctor };
        assert_eq!(bare.label(), "Médico #4");
    }
}
