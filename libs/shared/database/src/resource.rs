use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::backend::BackendClient;
use crate::error::BackendError;

/// CRUD access to one backend collection such as `/api/medicos`.
///
/// Lists go through the tag cache under the collection's tag; single-record
/// reads always hit the backend. Every mutation revalidates the tag.
pub struct Resource<T> {
    client: Arc<BackendClient>,
    path: &'static str,
    tag: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            path: self.path,
            tag: self.tag,
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Resource<T> {
    pub fn new(client: Arc<BackendClient>, path: &'static str, tag: &'static str) -> Self {
        Self {
            client,
            path,
            tag,
            _marker: PhantomData,
        }
    }

    pub fn client(&self) -> &Arc<BackendClient> {
        &self.client
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }

    pub async fn list(&self) -> Result<Vec<T>, BackendError> {
        debug!("Listing {}", self.path);
        self.client.get_cached(self.path, self.tag, None).await
    }

    pub async fn get(&self, id: i64) -> Result<T, BackendError> {
        debug!("Fetching {} {}", self.tag, id);
        self.client.get(&self.item_path(id)).await
    }

    pub async fn create<P>(&self, payload: &P) -> Result<T, BackendError>
    where
        P: Serialize + ?Sized,
    {
        let created = self.client.post(self.path, payload).await?;
        self.client.revalidate(self.tag).await;
        Ok(created)
    }

    pub async fn update<P>(&self, id: i64, payload: &P) -> Result<T, BackendError>
    where
        P: Serialize + ?Sized,
    {
        let updated = self.client.put(&self.item_path(id), payload).await?;
        self.client.revalidate(self.tag).await;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), BackendError> {
        self.client.delete(&self.item_path(id)).await?;
        self.client.revalidate(self.tag).await;
        Ok(())
    }
}
