//! Error types for the store seam and the admin JSON API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure of a content store call.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No database configured or the pool could not be created.
    #[error("content store unavailable")]
    Unavailable,

    /// Unique slug constraint violated on insert/update.
    #[error("slug already exists")]
    DuplicateSlug,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let unique = err
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);
        if unique {
            StoreError::DuplicateSlug
        } else {
            StoreError::Database(err)
        }
    }
}

/// Error body shared by every JSON endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the admin API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Authorization required")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Slug already exists")]
    Conflict,

    #[error("Too many login attempts. Please try again later.")]
    TooManyRequests,

    #[error("Database not available")]
    Unavailable,

    #[error("Internal error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => ApiError::Unavailable,
            StoreError::DuplicateSlug => ApiError::Conflict,
            StoreError::Database(e) => {
                tracing::error!(error = %e, "database error in admin api");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_maps_to_api_status() {
        let res = ApiError::from(StoreError::Unavailable).into_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

        let res = ApiError::from(StoreError::DuplicateSlug).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_error_body_carries_only_error() {
        let res = ApiError::bad_request("Name is required").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Name is required" }));
    }

    #[test]
    fn test_non_database_sqlx_error_is_not_duplicate() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
    }
}
