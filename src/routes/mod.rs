mod entity;
mod status;

pub use entity::{entity_routes, resource_routes};
pub use status::{status_routes, RowCounts};

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: status routes plus `/users/`, `/orders/` and `/offers/`, with
/// request tracing and a cap on body size.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(status_routes(state.clone()))
        .merge(entity_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(map_response(limit_rejection_envelope))
        .layer(TraceLayer::new_for_http())
}

/// The body limit layer answers an oversized `Content-Length` with plain text before any
/// extractor runs. Rewrap that answer in the JSON error envelope.
async fn limit_rejection_envelope(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE && !is_json {
        return AppError::PayloadTooLarge("length limit exceeded".into()).into_response();
    }
    response
}
