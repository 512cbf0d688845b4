// src/state.rs
// Shared application state for the HTTP layer

use sqlx::SqlitePool;
use tracing::info;

use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::tasks::TaskStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tasks: TaskStore,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            tasks: TaskStore::new(pool.clone()),
            pool,
        }
    }

    /// Open the configured database, migrate it and build the state
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = db::connect(&config.database_url).await?;
        if config.is_in_memory() {
            info!("Using in-memory database; tasks will not persist");
        }
        Ok(Self::new(pool))
    }
}
