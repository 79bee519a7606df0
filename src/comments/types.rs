use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric identifier of a comment, supplied by the caller.
///
/// Every boundary (request body, path parameter, stored document) is
/// normalized to this type, so ids are only ever compared as integers.
/// Integral floats such as `2.0` are accepted wherever an id is read.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a numeric id: {0:?}")]
pub struct InvalidCommentId(pub String);

impl FromStr for CommentId {
    type Err = InvalidCommentId;

    /// Accepts integer text (`"42"`) and integral decimal text (`"42.0"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Ok(Self(id));
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::from_f64(value).ok_or_else(|| InvalidCommentId(s.to_string())),
            Err(_) => Err(InvalidCommentId(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = serde_json::Number::deserialize(deserializer)?;
        Self::from_number(&number).ok_or_else(|| {
            serde::de::Error::custom(format!("id must be an integer number, got {}", number))
        })
    }
}

impl CommentId {
    /// Converts an integral, finite, in-range float into an id.
    pub fn from_f64(value: f64) -> Option<Self> {
        // i64::MAX is not exactly representable; 2^63 is the first value past it.
        const UPPER: f64 = 9_223_372_036_854_775_808.0;
        if value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < UPPER {
            Some(Self(value as i64))
        } else {
            None
        }
    }

    pub fn from_number(number: &serde_json::Number) -> Option<Self> {
        match number.as_i64() {
            Some(id) => Some(Self(id)),
            None => number.as_f64().and_then(Self::from_f64),
        }
    }

    /// Reads an id out of a JSON value, if it is an integer-valued number.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Self::from_number(n),
            _ => None,
        }
    }
}

/// A single persisted comment. Field order is the on-disk order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: CommentId,
    pub comment: String,
}

impl CommentRecord {
    pub fn new(id: CommentId, comment: impl Into<String>) -> Self {
        Self {
            id,
            comment: comment.into(),
        }
    }
}
