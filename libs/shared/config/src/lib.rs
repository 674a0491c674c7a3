use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DASHBOARD_TTL_SECS: u64 = 300;
const DEFAULT_STATUS_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub bind_address: String,
    pub backend_timeout_secs: u64,
    pub dashboard_ttl_secs: u64,
    pub status_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            dashboard_ttl_secs: DEFAULT_DASHBOARD_TTL_SECS,
            status_ttl_secs: DEFAULT_STATUS_TTL_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            backend_url: env::var("CLINAPP_BACKEND_URL")
                .map(|url| normalize_base_url(&url))
                .unwrap_or_else(|_| {
                    warn!("CLINAPP_BACKEND_URL not set, using empty value");
                    String::new()
                }),
            bind_address: env::var("CLINAPP_BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            backend_timeout_secs: parse_var("CLINAPP_BACKEND_TIMEOUT_SECS", DEFAULT_BACKEND_TIMEOUT_SECS),
            dashboard_ttl_secs: parse_var("CLINAPP_DASHBOARD_TTL_SECS", DEFAULT_DASHBOARD_TTL_SECS),
            status_ttl_secs: parse_var("CLINAPP_STATUS_TTL_SECS", DEFAULT_STATUS_TTL_SECS),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - backend URL missing");
        }

        config
    }

    /// Config pointing at a specific backend, everything else defaulted.
    pub fn with_backend_url(url: &str) -> Self {
        Self {
            backend_url: normalize_base_url(url),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.backend_url.is_empty()
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }

    pub fn dashboard_ttl(&self) -> Duration {
        Duration::from_secs(self.dashboard_ttl_secs)
    }

    pub fn status_ttl(&self) -> Duration {
        Duration::from_secs(self.status_ttl_secs)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
