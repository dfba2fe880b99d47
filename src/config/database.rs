//! Database configuration module.
//!
//! This module handles the `SQLite` connection and the creation of the `purchases` table.
//! The table definition is generated from the [`Purchase`] entity with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust model.

use crate::entities::Purchase;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File name of the local purchase database.
pub const DATABASE_FILE_NAME: &str = "billing.db";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling back to
/// `billing.db` in the install directory.
pub fn get_database_url() -> Result<String> {
    let from_env = std::env::var("DATABASE_URL").ok();
    let dir = super::install_dir()?;
    Ok(resolve_database_url(from_env, &dir))
}

/// Picks the explicit URL when present, otherwise builds one for `dir/billing.db`.
#[must_use]
pub fn resolve_database_url(from_env: Option<String>, dir: &Path) -> String {
    from_env
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| sqlite_url_for(&dir.join(DATABASE_FILE_NAME)))
}

/// `SQLite` URL for a file path; `mode=rwc` creates the file when missing.
#[must_use]
pub fn sqlite_url_for(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

/// Establishes a connection to the database at `database_url`.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `purchases` table if it does not already exist.
///
/// Safe to run on every startup.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut purchase_table = schema.create_table_from_entity(Purchase);
    purchase_table.if_not_exists();

    db.execute(builder.build(&purchase_table)).await?;
    Ok(())
}

/// Connects and ensures the schema exists.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    info!("Database ready; purchases table ensured.");
    Ok(db)
}
