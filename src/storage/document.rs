use crate::comments::types::CommentRecord;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Indentation used when writing the document (three spaces).
const INDENT: &[u8] = b"   ";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The file was read but its content is not a JSON array of comments.
    #[error("document {} is not a valid comment list: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The records could not be turned into JSON before writing.
    #[error("failed to encode comments for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The file could not be read or written.
    #[error("document {} is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Accessor for the backing document.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
}

impl JsonDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the document is present on disk. Only regular files count.
    pub async fn exists(&self) -> bool {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        }
    }

    /// Reads and parses the whole document.
    pub async fn load(&self) -> Result<Vec<CommentRecord>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<CommentRecord> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} comments from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Overwrites the document with `records`, pretty-printed.
    pub async fn save(&self, records: &[CommentRecord]) -> Result<(), StoreError> {
        let bytes = encode(records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| StoreError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Wrote {} comments to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn encode(records: &[CommentRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    Ok(out)
}
