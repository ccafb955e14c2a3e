use crate::result::{Error, Result};
use async_trait::async_trait;
use reqwest::Url;

mod fs;
mod memory;

pub use fs::FsObjectStore;
pub use memory::MemoryObjectStore;

/// Blob storage for listing images.
///
/// Uploading to an existing path replaces the previous object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<()>;
    /// Publicly fetchable URL of a previously uploaded object.
    async fn url(&self, path: &str) -> Result<String>;
}

/// Object path for an uploaded file: `{prefix}/{file_name}`.
pub fn object_path(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let file_name = file_name.trim_start_matches('/');
    match prefix.len() {
        0 => file_name.to_string(),
        _ => format!("{}/{}", prefix, file_name),
    }
}

/// Public URL of `path` under `base_url`, each path segment percent-encoded.
pub fn public_url(base_url: &str, path: &str) -> Result<String> {
    let mut url = Url::parse(base_url)
        .map_err(|e| Error::ObjectStoreError(format!("invalid base url {:?}: {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| Error::ObjectStoreError(format!("base url {:?} can't hold a path", base_url)))?
        .pop_if_empty()
        .extend(path.split('/'));
    Ok(url.to_string())
}
