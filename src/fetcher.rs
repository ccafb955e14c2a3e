use crate::models::{City, LabRecord, FIELD_POSTAL_CODE};
use crate::result::Result;
use crate::storage::LabStorage;
use std::sync::Arc;

/// Loads every listing stored for a city's postal code.
#[derive(Clone)]
pub struct LabFetcher {
    storage: Arc<dyn LabStorage>,
}

impl LabFetcher {
    pub fn new(storage: Arc<dyn LabStorage>) -> Self {
        Self { storage }
    }

    pub async fn fetch(&self, city: &City) -> Result<Vec<LabRecord>> {
        debug!(
            "fetching {} for {} ({})",
            self.storage.collection(),
            city.name,
            city.postal_code
        );
        let labs = self
            .storage
            .find_by_field(FIELD_POSTAL_CODE, city.postal_code)
            .await?;
        info!("{} labs found in {}", labs.len(), city.name);
        Ok(labs)
    }
}
