use super::types::{CommentId, CommentRecord};
use crate::storage::{JsonDocument, StoreError};

use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("id {0} already exists")]
    Conflict(CommentId),
    #[error("no comment found with id: {0}")]
    NotFound(CommentId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct CommentService {
    document: JsonDocument,
    write_lock: RwLock<()>,
}

impl CommentService {
    pub fn new(document: JsonDocument) -> Self {
        Self {
            document,
            write_lock: RwLock::new(()),
        }
    }

    pub fn document_path(&self) -> &Path {
        self.document.path()
    }

    pub async fn document_exists(&self) -> bool {
        self.document.exists().await
    }

    /// Returns every stored comment in document order.
    pub async fn list(&self) -> Result<Vec<CommentRecord>, CommentError> {
        let _guard = self.write_lock.read().await;
        Ok(self.document.load().await?)
    }

    /// Appends a new comment. Fails if the id is already taken.
    pub async fn add(&self, record: CommentRecord) -> Result<(), CommentError> {
        let _guard = self.write_lock.write().await;
        let mut records = self.document.load().await?;

        if records.iter().any(|r| r.id == record.id) {
            return Err(CommentError::Conflict(record.id));
        }

        records.push(record);
        self.document.save(&records).await?;
        Ok(())
    }

    /// Replaces the text of an existing comment in place.
    pub async fn update(&self, id: CommentId, comment: String) -> Result<(), CommentError> {
        let _guard = self.write_lock.write().await;
        let mut records = self.document.load().await?;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CommentError::NotFound(id))?;
        record.comment = comment;

        self.document.save(&records).await?;
        Ok(())
    }

    /// Removes a comment, keeping the relative order of the rest.
    pub async fn delete(&self, id: CommentId) -> Result<CommentRecord, CommentError> {
        let _guard = self.write_lock.write().await;
        let mut records = self.document.load().await?;

        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CommentError::NotFound(id))?;
        let removed = records.remove(index);

        self.document.save(&records).await?;
        Ok(removed)
    }
}
