use super::LabStorage;
use crate::models::{LabRecord, NewLabRecord};
use crate::result::{Error, Result};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

const CREATED_AT: &str = "createdAt";

struct Document {
    id: String,
    body: Map<String, Value>,
}

/// Schema-less in-process document collection.
pub struct MemoryStorage {
    collection: String,
    documents: RwLock<Vec<Document>>,
}

impl MemoryStorage {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            documents: RwLock::new(vec![]),
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    fn to_record(document: &Document) -> Result<LabRecord> {
        let mut body = document.body.clone();
        body.insert("id".to_string(), Value::String(document.id.clone()));
        Ok(serde_json::from_value(Value::Object(body))?)
    }
}

#[async_trait]
impl LabStorage for MemoryStorage {
    fn collection(&self) -> &str {
        self.collection.as_str()
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<LabRecord>> {
        let documents = self.documents.read().await;
        let found = documents
            .iter()
            .filter(|d| d.body.get(field).and_then(Value::as_str) == Some(value))
            .map(Self::to_record)
            .collect::<Result<Vec<LabRecord>>>()?;
        debug!(
            "{}: {} documents where {} == {:?}",
            self.collection,
            found.len(),
            field,
            value
        );
        Ok(found)
    }

    async fn insert(&self, lab: NewLabRecord) -> Result<LabRecord> {
        let created_at: NaiveDateTime = Utc::now().naive_utc();
        let mut body = match serde_json::to_value(&lab)? {
            Value::Object(body) => body,
            other => {
                return Err(Error::DbError(format!(
                    "document body must be an object, got {}",
                    other
                )))
            }
        };
        body.insert(CREATED_AT.to_string(), serde_json::to_value(created_at)?);
        let id = Uuid::new_v4().to_simple().to_string();
        self.documents.write().await.push(Document {
            id: id.clone(),
            body,
        });
        debug!("{}: inserted document {}", self.collection, id);
        Ok(lab.into_record(id, created_at))
    }
}
