//! Request body validation.
//!
//! A body must carry exactly the declared fields, each with its declared
//! type. Checks run in a fixed order (missing, then unexpected, then types)
//! and the first failing check decides the response.

use super::error::ApiError;
use super::protocol::CommentPayload;
use crate::comments::types::CommentId;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::{Json, async_trait};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON number with no fractional part that fits in an `i64`.
    Integer,
    String,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Integer => CommentId::from_json(value).is_some(),
            FieldKind::String => value.is_string(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::Integer => "an integer number",
            FieldKind::String => "a string",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Fields required by `POST /add` and `PUT /update`.
pub const COMMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        kind: FieldKind::Integer,
    },
    FieldSpec {
        name: "comment",
        kind: FieldKind::String,
    },
];

pub fn validate_fields<'a>(
    body: &'a Value,
    fields: &[FieldSpec],
) -> Result<&'a Map<String, Value>, ApiError> {
    let object = body.as_object().ok_or_else(|| {
        ApiError::InvalidRequest("Request body must be a JSON object".to_string())
    })?;

    let missing: Vec<&str> = fields
        .iter()
        .map(|f| f.name)
        .filter(|name| !object.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::InvalidRequest(format!(
            "Missing fields: {}",
            missing.join(", ")
        )));
    }

    let unexpected: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|key| !fields.iter().any(|f| f.name == *key))
        .collect();
    if !unexpected.is_empty() {
        return Err(ApiError::InvalidRequest(format!(
            "Unexpected fields: {}",
            unexpected.join(", ")
        )));
    }

    for field in fields {
        if !field.kind.accepts(&object[field.name]) {
            return Err(ApiError::InvalidRequest(format!(
                "Field '{}' must be {}",
                field.name,
                field.kind.describe()
            )));
        }
    }

    Ok(object)
}

/// Extractor yielding a comment body that passed [`validate_fields`].
#[derive(Debug)]
pub struct ValidComment(pub CommentPayload);

#[async_trait]
impl<S> FromRequest<S> for ValidComment
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                ApiError::InvalidRequest(format!("Invalid JSON body: {}", rejection.body_text()))
            })?;

        let object = validate_fields(&body, COMMENT_FIELDS)?;

        // Both lookups are guaranteed by validate_fields.
        let id = object.get("id").and_then(CommentId::from_json);
        let comment = object.get("comment").and_then(Value::as_str);
        match (id, comment) {
            (Some(id), Some(comment)) => Ok(ValidComment(CommentPayload {
                id,
                comment: comment.to_string(),
            })),
            _ => Err(ApiError::InvalidRequest(
                "Fields 'id' and 'comment' are required".to_string(),
            )),
        }
    }
}
