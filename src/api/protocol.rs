//! HTTP Protocol
//!
//! Route paths and the JSON bodies exchanged with clients.

use crate::comments::types::CommentId;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Prefix every route below is nested under.
pub const API_PREFIX: &str = "/api";
/// List every stored comment.
pub const ENDPOINT_COMMENTS: &str = "/comments";
/// Replace the text of an existing comment.
pub const ENDPOINT_UPDATE: &str = "/update";
/// Insert a new comment.
pub const ENDPOINT_ADD: &str = "/add";
/// Remove a comment by the id in the path.
pub const ENDPOINT_DELETE: &str = "/delete/:id";

/// Body of the plain-text 404 returned for unknown routes.
pub const ROUTE_NOT_FOUND: &str = "Route Not Found";

// --- Data Transfer Objects ---

/// Validated body of `POST /add` and `PUT /update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub id: CommentId,
    pub comment: String,
}

/// Success acknowledgment for mutating routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `false`.
    pub error: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: message.into(),
        }
    }
}

/// Shape of every JSON failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `true`.
    pub error: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}
