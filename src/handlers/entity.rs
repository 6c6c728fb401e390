//! Entity CRUD handlers, generic over [`Entity`] and instantiated per route.

use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody};
use crate::model::Entity;
use crate::response::{confirmation, Action};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Vec<E>>, AppError> {
    let rows = CrudService::list_all::<E>(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    JsonBody(entity): JsonBody<E>,
) -> Result<String, AppError> {
    let row = CrudService::create(&state.pool, &entity).await?;
    tracing::info!(entity = E::TABLE, id = row.id(), "created");
    Ok(confirmation::<E>(Action::Added))
}

pub async fn read<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<E>, AppError> {
    let row = CrudService::get_by_id::<E>(&state.pool, id).await?;
    Ok(Json(row))
}

pub async fn update<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(changes): JsonBody<E::Changes>,
) -> Result<String, AppError> {
    CrudService::update::<E>(&state.pool, id, &changes).await?;
    tracing::info!(entity = E::TABLE, id, "updated");
    Ok(confirmation::<E>(Action::Updated))
}

pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<String, AppError> {
    CrudService::delete::<E>(&state.pool, id).await?;
    tracing::info!(entity = E::TABLE, id, "deleted");
    Ok(confirmation::<E>(Action::Deleted))
}
