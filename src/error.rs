//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid setting {key}={value:?}")]
    InvalidSetting { key: &'static str, value: String },
    #[error("seed fixture {file}: {message}")]
    Seed { file: String, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("malformed body: {0}")]
    MalformedBody(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Reclassifies unique-key violations so a duplicate id is reported as a conflict.
    pub fn from_write(err: sqlx::Error, what: impl Into<String>) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return AppError::Conflict(format!("{} already exists", what.into()));
            }
        }
        AppError::Db(err)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingField(_) | AppError::MalformedBody(_) | AppError::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::NotFound(_) | AppError::Db(sqlx::Error::RowNotFound) => "not_found",
            AppError::MissingField(_) => "missing_field",
            AppError::MalformedBody(_) => "malformed_body",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::InvalidPath(_) => "invalid_path",
            AppError::Conflict(_) => "conflict",
            AppError::Unavailable(_) => "store_unavailable",
            AppError::Db(_) => "database_error",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(AppError::NotFound("user 7".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::MissingField("age".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MalformedBody("eof".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Conflict("user 1".into()).status(), StatusCode::CONFLICT);
        assert_eq!(AppError::PayloadTooLarge("body".into()).status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(AppError::InvalidPath("abc".into()).code(), "invalid_path");
    }

    #[test]
    fn unavailable_store_is_503() {
        let err = AppError::Unavailable("pool closed".into());
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "store_unavailable");
    }

    #[test]
    fn row_not_found_is_reported_as_not_found() {
        let err = AppError::Db(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn non_constraint_write_errors_stay_database_errors() {
        let err = AppError::from_write(sqlx::Error::PoolTimedOut, "user 1");
        assert_eq!(err.code(), "database_error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn error_envelope_carries_code_and_message() {
        let response = AppError::MissingField("email".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "missing_field");
        assert_eq!(body["error"]["message"], "missing field: email");
    }
}
