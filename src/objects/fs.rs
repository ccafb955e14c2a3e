use super::{public_url, ObjectStore};
use crate::result::{Error, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

/// Stores objects as files under `root`, served from `public_base_url`.
pub struct FsObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsObjectStore {
    pub fn new<P: AsRef<Path>>(root: P, public_base_url: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes || path.is_empty() {
            return Err(Error::ObjectStoreError(format!(
                "invalid object path {:?}",
                path
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<()> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, bytes).await?;
        debug!("uploaded {}", target.display());
        Ok(())
    }

    async fn url(&self, path: &str) -> Result<String> {
        let target = self.resolve(path)?;
        match tokio::fs::metadata(&target).await {
            Ok(meta) if meta.is_file() => public_url(&self.public_base_url, path),
            _ => Err(Error::ObjectNotFound(path.to_string())),
        }
    }
}
