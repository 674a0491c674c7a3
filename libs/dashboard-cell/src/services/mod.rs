pub mod dashboard;

pub use dashboard::{DashboardService, DASHBOARD_TAGS};
