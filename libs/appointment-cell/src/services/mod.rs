pub mod appointment;
pub mod report;
pub mod stats;

pub use appointment::AppointmentService;
