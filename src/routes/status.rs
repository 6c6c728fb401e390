//! Operational routes: liveness, store readiness with per-table row counts, build version.

use crate::error::AppError;
use crate::model::{Offer, Order, User};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// Rows currently held by each table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RowCounts {
    pub users: i64,
    pub orders: i64,
    pub offers: i64,
}

impl RowCounts {
    pub async fn collect(pool: &SqlitePool) -> Result<Self, AppError> {
        Ok(RowCounts {
            users: CrudService::count::<User>(pool).await?,
            orders: CrudService::count::<Order>(pool).await?,
            offers: CrudService::count::<Offer>(pool).await?,
        })
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 503 with the error envelope when any table cannot be counted.
async fn ready(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let rows = RowCounts::collect(&state.pool)
        .await
        .map_err(|e| AppError::Unavailable(e.to_string()))?;
    Ok(Json(json!({ "status": "ok", "rows": rows })))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn status_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
