use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const FIELD_NAME: &str = "name";
pub const FIELD_POSTAL_CODE: &str = "postalCode";

/// A stored laboratory listing. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabRecord {
    pub id: String,
    pub name: String,
    pub pricing: f64,
    pub rating: f64,
    pub postal_code: String,
    pub image_url: String,
    pub google_link: String,
    pub created_at: NaiveDateTime,
}

/// Document body written by the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLabRecord {
    pub name: String,
    pub pricing: f64,
    pub rating: f64,
    pub postal_code: String,
    pub image_url: String,
    pub google_link: String,
}

impl NewLabRecord {
    pub fn into_record(self, id: String, created_at: NaiveDateTime) -> LabRecord {
        LabRecord {
            id,
            name: self.name,
            pricing: self.pricing,
            rating: self.rating,
            postal_code: self.postal_code,
            image_url: self.image_url,
            google_link: self.google_link,
            created_at,
        }
    }
}
