//! Shared application state for all routes, and the startup sequence that builds it.

use crate::config::{SeedData, Settings};
use crate::error::AppError;
use crate::store;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    /// Connect, recreate the tables and load the seed rows named by `settings`.
    pub async fn bootstrap(settings: &Settings) -> Result<Self, AppError> {
        let seed = SeedData::load(settings).await?;
        Self::bootstrap_with(settings, &seed).await
    }

    pub async fn bootstrap_with(settings: &Settings, seed: &SeedData) -> Result<Self, AppError> {
        let pool = store::connect(settings).await?;
        store::reset(&pool).await?;
        store::seed(&pool, seed).await?;
        Ok(AppState { pool })
    }
}
