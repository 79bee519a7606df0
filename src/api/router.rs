use super::guard::require_document;
use super::handlers;
use super::protocol::{
    API_PREFIX, ENDPOINT_ADD, ENDPOINT_COMMENTS, ENDPOINT_DELETE, ENDPOINT_UPDATE,
};
use crate::comments::service::CommentService;
use crate::config::Config;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Router, middleware};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the full HTTP surface.
///
/// The existence guard is attached per method with `route_layer`, so a wrong
/// method on a known path falls through to the plain-text 404 untouched.
pub fn build_router(service: Arc<CommentService>, config: &Config) -> Router {
    let guard = middleware::from_fn(require_document);

    let api = Router::new()
        .route(
            ENDPOINT_COMMENTS,
            get(handlers::list_comments)
                .route_layer(guard.clone())
                .fallback(handlers::route_not_found),
        )
        .route(
            ENDPOINT_UPDATE,
            put(handlers::update_comment)
                .route_layer(guard.clone())
                .fallback(handlers::route_not_found),
        )
        .route(
            ENDPOINT_ADD,
            post(handlers::add_comment)
                .route_layer(guard.clone())
                .fallback(handlers::route_not_found),
        )
        .route(
            ENDPOINT_DELETE,
            delete(handlers::delete_comment)
                .route_layer(guard)
                .fallback(handlers::route_not_found),
        );

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(handlers::route_not_found)
        .layer(Extension(service))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
}
