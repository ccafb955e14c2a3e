use super::{public_url, ObjectStore};
use crate::result::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct MemoryObjectStore {
    base_url: String,
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryObjectStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(path).cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<()> {
        debug!("storing {} bytes at {}", bytes.len(), path);
        self.objects.write().await.insert(path.to_string(), bytes);
        Ok(())
    }

    async fn url(&self, path: &str) -> Result<String> {
        match self.objects.read().await.contains_key(path) {
            true => public_url(&self.base_url, path),
            false => Err(Error::ObjectNotFound(path.to_string())),
        }
    }
}
