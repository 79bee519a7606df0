use super::error::ApiError;
use crate::comments::service::CommentService;

use axum::Extension;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Rejects the request with 404 when the backing document is absent.
///
/// Installed on every matched route, so no handler or body validator runs
/// against a missing document.
pub async fn require_document(
    Extension(service): Extension<Arc<CommentService>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !service.document_exists().await {
        return Err(ApiError::NotFound(format!(
            "File not found at path: {}",
            service.document_path().display()
        )));
    }
    Ok(next.run(request).await)
}
