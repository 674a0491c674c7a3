use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use shared_config::AppConfig;
use shared_database::{BackendClient, BackendError};

use crate::models::{AppointmentStatusCounts, ConsultationPeriodCounts, DashboardStats, SystemStatus};

const STATS_PATH: &str = "/api/dashboard/stats";
const SYSTEM_STATUS_PATH: &str = "/api/dashboard/system-status";
const APPOINTMENT_STATS_PATH: &str = "/api/dashboard/citas-stats";
const CONSULTATION_STATS_PATH: &str = "/api/dashboard/consultas-stats";

pub const STATS_TAG: &str = "dashboard-stats";
pub const SYSTEM_STATUS_TAG: &str = "system-status";
pub const APPOINTMENT_STATS_TAG: &str = "citas-stats";
pub const CONSULTATION_STATS_TAG: &str = "consultas-stats";

pub const DASHBOARD_TAGS: [&str; 4] = [
    STATS_TAG,
    SYSTEM_STATUS_TAG,
    APPOINTMENT_STATS_TAG,
    CONSULTATION_STATS_TAG,
];

/// Reads the backend's dashboard aggregates.
///
/// None of the reads fail: when the backend is unreachable or answers with
/// something unexpected the default value is returned and a warning logged.
#[derive(Clone)]
pub struct DashboardService {
    backend: Arc<BackendClient>,
    stats_ttl: Duration,
    status_ttl: Duration,
}

impl DashboardService {
    pub fn new(backend: Arc<BackendClient>, config: &AppConfig) -> Self {
        Self {
            backend,
            stats_ttl: config.dashboard_ttl(),
            status_ttl: config.status_ttl(),
        }
    }

    pub async fn stats(&self) -> DashboardStats {
        self.fetch_or_default(STATS_PATH, STATS_TAG, self.stats_ttl).await
    }

    pub async fn system_status(&self) -> SystemStatus {
        self.fetch_or_default(SYSTEM_STATUS_PATH, SYSTEM_STATUS_TAG, self.status_ttl)
            .await
    }

    pub async fn appointment_stats(&self) -> AppointmentStatusCounts {
        self.fetch_or_default(APPOINTMENT_STATS_PATH, APPOINTMENT_STATS_TAG, self.stats_ttl)
            .await
    }

    pub async fn consultation_stats(&self) -> ConsultationPeriodCounts {
        self.fetch_or_default(CONSULTATION_STATS_PATH, CONSULTATION_STATS_TAG, self.stats_ttl)
            .await
    }

    /// Drops every cached dashboard aggregate. Returns the number of
    /// entries removed.
    pub async fn revalidate(&self) -> usize {
        let mut dropped = 0;
        for tag in DASHBOARD_TAGS {
            dropped += self.backend.revalidate(tag).await;
        }
        info!("Dashboard cache revalidated, {} entries dropped", dropped);
        dropped
    }

    async fn fetch_or_default<T>(&self, path: &str, tag: &str, ttl: Duration) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.fetch(path, tag, ttl).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Falling back to defaults for {}: {}", path, e);
                T::default()
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, tag: &str, ttl: Duration) -> Result<T, BackendError> {
        let value = self.backend.get_cached_value(path, tag, Some(ttl)).await?;
        Ok(serde_json::from_value(unwrap_envelope(value))?)
    }
}

/// The backend wraps some payloads as `{"data": ...}`. A missing, null or
/// falsy `data` means the payload is the body itself.
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("data").map_or(false, is_truthy) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
