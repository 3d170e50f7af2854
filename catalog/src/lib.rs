pub mod models;

use std::str::FromStr;

use derive_more::{Display, Error, From};
use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use crate::models::favorites::{Favorite, FavoriteItem};
pub use crate::models::foods::{CreateFoodPayload, Food};

static MIGRATOR: Migrator = sqlx::migrate!();

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[derive(Debug, Display, From, Error)]
pub enum CatalogError {
    #[from]
    Database(sqlx::Error),
    #[from]
    Migrate(MigrateError),
}

/// Opens the pool for `database_url` and brings the schema up to date.
///
/// The database file is created when it does not exist yet.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let db = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&db).await?;

    Ok(db)
}

/// Inserts the default catalog when `foods` is empty.
///
/// Returns how many rows were inserted, zero when the catalog already had data.
#[tracing::instrument(skip_all)]
pub async fn seed(db: &SqlitePool) -> Result<u64> {
    let mut conn = db.acquire().await?;

    if Food::count(&mut conn).await? > 0 {
        return Ok(0);
    }

    let inserted = Food::create_bulk(&mut conn, models::foods::DEFAULT_FOODS).await?;
    tracing::info!("Database seeded with default foods");

    Ok(inserted)
}
