//! HTTP-facing error type
//!
//! Every variant renders as a plain-text body. Storage failures are logged and
//! reported without detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quotes_types::PatchError;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("required data missing")]
    MissingData,

    #[error("field {0} cannot be modified")]
    ForbiddenField(String),

    #[error("Author with id {0} not found")]
    AuthorNotFound(i64),

    #[error("Quote with id {0} not found")]
    QuoteNotFound(i64),

    #[error("Author with name {0} already exists")]
    DuplicateAuthor(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingData | ApiError::ForbiddenField(_) => StatusCode::BAD_REQUEST,
            ApiError::AuthorNotFound(_) | ApiError::QuoteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateAuthor(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PatchError> for ApiError {
    fn from(e: PatchError) -> Self {
        match e {
            PatchError::ForbiddenField(field) => ApiError::ForbiddenField(field),
            PatchError::InvalidValue => ApiError::MissingData,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Storage(e) => {
                tracing::error!("Request failed: {}", e);
                (status, "internal server error").into_response()
            }
            other => {
                tracing::debug!("Request rejected ({}): {}", status, other);
                (status, other.to_string()).into_response()
            }
        }
    }
}
