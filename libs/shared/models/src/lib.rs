pub mod clinic;
pub mod error;

pub use clinic::{full_name, Doctor, Patient, Role, Specialty, User};
pub use error::AppError;
