//! Database connection management and schema bootstrap.

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::PathBuf;

use crate::entities::{bed, harvest, plant, plant_image};

/// Local storage manager for garden data.
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Initialize the local storage with a SQLite database.
    ///
    /// With `in_memory` set the database lives only for the lifetime of the
    /// connection; tests use this to get a fresh schema per run.
    pub async fn new(in_memory: bool) -> Result<Self> {
        let database_url = if in_memory {
            "sqlite::memory:".to_string()
        } else {
            let path = Self::database_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
            }
            format!("sqlite://{}?mode=rwc", path.display())
        };

        let mut options = ConnectOptions::new(database_url.clone());
        if in_memory {
            // Every pooled connection would otherwise get its own empty
            // in-memory database; a single connection keeps it alive and
            // private to this storage instance.
            options.max_connections(1);
        }

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Where the on-disk database lives.
    fn database_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("gardenist").join("gardenist.db"))
    }

    /// Create tables that do not exist yet.
    ///
    /// Parent tables are created before children so foreign keys resolve.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statements = vec![
            schema.create_table_from_entity(bed::Entity),
            schema.create_table_from_entity(plant::Entity),
            schema.create_table_from_entity(harvest::Entity),
            schema.create_table_from_entity(plant_image::Entity),
        ];

        for statement in &mut statements {
            statement.if_not_exists();
            self.conn.execute(backend.build(&*statement)).await?;
        }

        Ok(())
    }
}
