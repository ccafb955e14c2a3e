use crate::result::{Error, Result};
use diesel::{
    prelude::*,
    r2d2::{ConnectionManager, Pool as _Pool},
};
pub mod models;

pub type Pool = _Pool<ConnectionManager<PgConnection>>;

embed_migrations!();

pub fn connect(database_url: &str, pool_size: u32) -> Result<Pool> {
    _Pool::builder()
        .max_size(pool_size)
        .build(ConnectionManager::<PgConnection>::new(database_url))
        .map_err(|e| Error::ConfigError(e.to_string()))
}

pub fn migrate(db_pool: &Pool) -> Result<()> {
    let connection = db_pool
        .get()
        .map_err(|e| Error::DbError(e.to_string()))?;

    embedded_migrations::run(&connection).map_err(|e| Error::DbError(e.to_string()))?;
    Ok(())
}
