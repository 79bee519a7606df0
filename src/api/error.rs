use super::protocol::ErrorResponse;
use crate::comments::service::CommentError;
use crate::storage::StoreError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Every failure a request can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, unexpected or mistyped request fields.
    #[error("{0}")]
    InvalidRequest(String),
    /// Missing record, missing path id, or missing backing document.
    #[error("{0}")]
    NotFound(String),
    /// Duplicate id on insert.
    #[error("{0}")]
    Conflict(String),
    /// The backing document exists but is not a list of comments.
    #[error("stored data is corrupted: {0}")]
    MalformedData(String),
    /// The backing document could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            // A corrupt document is a server-side defect, not a bad request.
            ApiError::MalformedData(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the client. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InvalidRequest(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                msg.clone()
            }
            ApiError::MalformedData(_) => "Stored data is not a valid comment list".to_string(),
            ApiError::StorageUnavailable(_) => "Internal Server Error".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Malformed { .. } => ApiError::MalformedData(err.to_string()),
            StoreError::Encode { .. } | StoreError::Unavailable { .. } => {
                ApiError::StorageUnavailable(err.to_string())
            }
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::Conflict(_) => ApiError::Conflict("Id already exists.".to_string()),
            CommentError::NotFound(id) => {
                ApiError::NotFound(format!("No comment found with id: {}", id))
            }
            CommentError::Store(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}
