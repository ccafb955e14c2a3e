use crate::models::{LabRecord, NewLabRecord};
use crate::result::Result;
use async_trait::async_trait;

mod memory;
#[cfg(feature = "pg-storage")]
mod pg;

pub use memory::MemoryStorage;
#[cfg(feature = "pg-storage")]
pub use pg::PgStorage;

/// Document store holding one collection of lab listings.
///
/// Queries are exact equality on a single document field; writes are
/// create-only, there is no update or delete.
#[async_trait]
pub trait LabStorage: Send + Sync {
    fn collection(&self) -> &str;
    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<LabRecord>>;
    async fn insert(&self, lab: NewLabRecord) -> Result<LabRecord>;
}
