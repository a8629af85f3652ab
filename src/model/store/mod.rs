
mod error;

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::config;

pub use self::error::{Error, Result};

pub type Db = Pool<Postgres>;

pub async fn new_db_pool() -> Result<Db> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(&config().DB_URL)
        .await
        .map_err(|e| Error::FailToCreatePool(e.to_string()))
}
