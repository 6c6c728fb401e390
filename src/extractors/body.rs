//! Typed JSON request bodies with presence checks for every required key.
//!
//! The body is parsed whatever the `Content-Type` header says.

use crate::error::AppError;
use crate::model::Payload;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::Value;

/// Extractor for a [`Payload`]. Rejects with `MalformedBody`, `MissingField` or `PayloadTooLarge`.
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: Payload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(e.body_text())
            } else {
                AppError::MalformedBody(e.body_text())
            }
        })?;
        parse_body(&bytes).map(JsonBody)
    }
}

/// Parse `bytes` as a JSON object holding every key in `T::REQUIRED`. Extra keys are ignored.
pub fn parse_body<T: Payload>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| AppError::MalformedBody(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| AppError::MalformedBody("body must be a JSON object".into()))?;
    if let Some(missing) = T::REQUIRED.iter().find(|key| !object.contains_key(**key)) {
        return Err(AppError::MissingField((*missing).to_string()));
    }
    serde_json::from_value(value).map_err(|e| AppError::MalformedBody(e.to_string()))
}
