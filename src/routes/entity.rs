//! Entity CRUD routes. Collection paths keep their trailing slash (`/users/`), item paths do not (`/users/:id`).

use crate::handlers::entity::{create, delete, list, read, update};
use crate::model::{Entity, Offer, Order, User};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET/POST `/{name}/` and GET/PUT/DELETE `/{name}/:id` for one entity.
pub fn resource_routes<E: Entity>(name: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("/{}/", name), get(list::<E>).post(create::<E>))
        .route(
            &format!("/{}/:id", name),
            get(read::<E>).put(update::<E>).delete(delete::<E>),
        )
}

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<User>("users"))
        .merge(resource_routes::<Order>("orders"))
        .merge(resource_routes::<Offer>("offers"))
        .with_state(state)
}
