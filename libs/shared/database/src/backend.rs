use std::time::Duration;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::cache::TagCache;
use crate::error::BackendError;

/// HTTP client for the clinic backend.
///
/// Holds a single connection pool and the tag cache shared by every
/// resource service.
pub struct BackendClient {
    client: Client,
    base_url: String,
    cache: TagCache,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(config.backend_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
            cache: TagCache::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    pub fn cache(&self) -> &TagCache {
        &self.cache
    }

    fn url(&self, path: &str) -> Result<String, BackendError> {
        if !self.is_configured() {
            return Err(BackendError::NotConfigured);
        }
        Ok(format!("{}{}", self.base_url, path))
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!("Making {} request to {}", method, url);

        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await.map_err(|e| {
            error!("Backend unreachable ({} {}): {}", method, url, e);
            BackendError::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("Backend error ({}) on {} {}: {}", status, method, path, text);

            return Err(match status.as_u16() {
                404 => BackendError::NotFound(text),
                code => BackendError::Status { status: code, body: text },
            });
        }

        // Some mutations answer with an empty body
        let raw = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(raw)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(serde_json::to_value(body)?)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(serde_json::to_value(body)?)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), BackendError> {
        self.request::<Value>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// GET through the tag cache. The raw JSON is cached so callers can
    /// decode the same entry into different shapes.
    pub async fn get_cached_value(&self, path: &str, tag: &str, ttl: Option<Duration>) -> Result<Value, BackendError> {
        self.cache
            .get_or_fetch(path, tag, ttl, || self.get::<Value>(path))
            .await
    }

    pub async fn get_cached<T: DeserializeOwned>(
        &self,
        path: &str,
        tag: &str,
        ttl: Option<Duration>,
    ) -> Result<T, BackendError> {
        let value = self.get_cached_value(path, tag, ttl).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn revalidate(&self, tag: &str) -> usize {
        self.cache.revalidate(tag).await
    }
}
