use super::error::ApiError;
use super::protocol::{MessageResponse, ROUTE_NOT_FOUND};
use super::validator::ValidComment;
use crate::comments::service::CommentService;
use crate::comments::types::{CommentId, CommentRecord};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn list_comments(
    Extension(service): Extension<Arc<CommentService>>,
) -> Result<Json<Vec<CommentRecord>>, ApiError> {
    let records = service.list().await?;
    tracing::debug!("Listing {} comments", records.len());
    Ok(Json(records))
}

pub async fn add_comment(
    Extension(service): Extension<Arc<CommentService>>,
    ValidComment(payload): ValidComment,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = payload.id;
    service.add(CommentRecord::new(id, payload.comment)).await?;

    tracing::info!("Comment {} added", id);
    Ok(Json(MessageResponse::ok("Comment added successfully")))
}

pub async fn update_comment(
    Extension(service): Extension<Arc<CommentService>>,
    ValidComment(payload): ValidComment,
) -> Result<Json<MessageResponse>, ApiError> {
    service.update(payload.id, payload.comment).await?;

    tracing::info!("Comment {} updated", payload.id);
    Ok(Json(MessageResponse::ok("Comment updated successfully")))
}

pub async fn delete_comment(
    Extension(service): Extension<Arc<CommentService>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if raw_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Id is required".to_string()));
    }
    let id: CommentId = raw_id
        .parse()
        .map_err(|_| ApiError::InvalidRequest("Id must be a number".to_string()))?;

    service.delete(id).await?;

    tracing::info!("Comment {} deleted", id);
    Ok(Json(MessageResponse::ok("Comment deleted successfully")))
}

pub async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}
