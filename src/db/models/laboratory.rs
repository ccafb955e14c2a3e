use crate::db::Pool;
use crate::models::{LabRecord, NewLabRecord};
use crate::result::Result;
use crate::schema::laboratories;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::{Insertable, Queryable};
use tokio_diesel::*;

#[derive(Queryable, Identifiable, Clone, Debug)]
#[table_name = "laboratories"]
pub struct Laboratory {
    pub id: i32,
    pub name: String,
    pub pricing: f64,
    pub rating: f64,
    pub postal_code: String,
    pub image_url: String,
    pub google_link: String,
    pub created_at: NaiveDateTime,
}

impl Laboratory {
    pub async fn get_by_postal_code(db_pool: &Pool, postal_code: String) -> Result<Vec<Self>> {
        Ok(laboratories::table
            .filter(laboratories::postal_code.eq(postal_code))
            .order(laboratories::id.asc())
            .load_async::<Self>(db_pool)
            .await?)
    }

    pub async fn get_by_name(db_pool: &Pool, name: String) -> Result<Vec<Self>> {
        Ok(laboratories::table
            .filter(laboratories::name.eq(name))
            .order(laboratories::id.asc())
            .load_async::<Self>(db_pool)
            .await?)
    }
}

impl From<Laboratory> for LabRecord {
    fn from(lab: Laboratory) -> Self {
        Self {
            id: lab.id.to_string(),
            name: lab.name,
            pricing: lab.pricing,
            rating: lab.rating,
            postal_code: lab.postal_code,
            image_url: lab.image_url,
            google_link: lab.google_link,
            created_at: lab.created_at,
        }
    }
}

#[derive(Insertable, Clone, Debug)]
#[table_name = "laboratories"]
pub struct NewLaboratory {
    pub name: String,
    pub pricing: f64,
    pub rating: f64,
    pub postal_code: String,
    pub image_url: String,
    pub google_link: String,
}

impl NewLaboratory {
    pub async fn save(self, db_pool: &Pool) -> Result<Laboratory> {
        Ok(diesel::insert_into(laboratories::table)
            .values(self)
            .get_result_async::<Laboratory>(db_pool)
            .await?)
    }
}

impl From<NewLabRecord> for NewLaboratory {
    fn from(lab: NewLabRecord) -> Self {
        Self {
            name: lab.name,
            pricing: lab.pricing,
            rating: lab.rating,
            postal_code: lab.postal_code,
            image_url: lab.image_url,
            google_link: lab.google_link,
        }
    }
}
