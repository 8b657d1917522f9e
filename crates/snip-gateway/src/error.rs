use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::{CoreError, StorageError};
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("expected 'original_url'")]
    MissingOriginalUrl,
    #[error("Code {0} not found")]
    CodeNotFound(String),
    #[error("stored url cannot be redirected to: {0}")]
    InvalidStoredUrl(CoreError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidBody(source) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::error(source.to_string()),
            ),
            AppError::MissingOriginalUrl => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::message(self.to_string()),
            ),
            AppError::CodeNotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorResponse::message(self.to_string()))
            }
            AppError::InvalidStoredUrl(source) => {
                error!(error = %source, "stored url is not redirectable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message("stored url is invalid"),
                )
            }
            AppError::Storage(source) => {
                error!(error = %source, "link store request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message("internal storage error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
