use super::LabStorage;
use crate::db::models::{Laboratory, NewLaboratory};
use crate::db::Pool;
use crate::models::{LabRecord, NewLabRecord, FIELD_NAME, FIELD_POSTAL_CODE};
use crate::result::{Error, Result};
use async_trait::async_trait;

/// Postgres-backed collection. Only the indexed document fields can be queried.
pub struct PgStorage {
    collection: String,
    db_pool: Pool,
}

impl PgStorage {
    pub fn new(collection: &str, db_pool: Pool) -> Self {
        Self {
            collection: collection.to_string(),
            db_pool,
        }
    }
}

#[async_trait]
impl LabStorage for PgStorage {
    fn collection(&self) -> &str {
        self.collection.as_str()
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<LabRecord>> {
        let labs = match field {
            FIELD_POSTAL_CODE => {
                Laboratory::get_by_postal_code(&self.db_pool, value.to_string()).await?
            }
            FIELD_NAME => Laboratory::get_by_name(&self.db_pool, value.to_string()).await?,
            _ => {
                return Err(Error::DbError(format!(
                    "field {} is not queryable in {}",
                    field, self.collection
                )))
            }
        };
        debug!("{}: {} rows where {} == {:?}", self.collection, labs.len(), field, value);
        Ok(labs.into_iter().map(LabRecord::from).collect())
    }

    async fn insert(&self, lab: NewLabRecord) -> Result<LabRecord> {
        let saved = NewLaboratory::from(lab).save(&self.db_pool).await?;
        debug!("{}: inserted row {}", self.collection, saved.id);
        Ok(saved.into())
    }
}
