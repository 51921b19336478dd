//! Collaborator interfaces the registry reads through
//!
//! The host platform owns folders, file metadata and file bytes. Each concern
//! gets its own trait so the registry can be driven by the REST client in
//! production and by in-memory stores in tests.

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::{self, Stream};
use std::pin::Pin;

use super::model::{FileRecord, Folder};

/// Finite sequence of byte chunks making up one file's content
pub type ContentStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>>> + Send>>;

/// Caller identity threaded through every delegated read.
///
/// Permissions are enforced by the host; this only carries what the host
/// needs to identify the caller, plus the correlation id used in logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accountability {
    pub token: Option<String>,
    pub correlation_id: String,
}

impl Accountability {
    pub fn new(token: Option<String>, correlation_id: impl Into<String>) -> Self {
        Self {
            token,
            correlation_id: correlation_id.into(),
        }
    }

    /// Context for calls that do not originate from an HTTP request
    pub fn system(token: Option<String>) -> Self {
        Self::new(token, uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
pub trait FolderReader: Send + Sync {
    /// Folders whose name matches exactly, at most `limit` of them
    async fn find_by_name(&self, ctx: &Accountability, name: &str, limit: usize) -> Result<Vec<Folder>>;

    /// Direct children of `parent_id`
    async fn children_of(&self, ctx: &Accountability, parent_id: &str) -> Result<Vec<Folder>>;
}

#[async_trait]
pub trait FileReader: Send + Sync {
    /// Files of `content_type` located directly in any of `folder_ids`
    async fn files_in(
        &self,
        ctx: &Accountability,
        folder_ids: &[String],
        content_type: &str,
    ) -> Result<Vec<FileRecord>>;
}

#[async_trait]
pub trait ContentReader: Send + Sync {
    async fn open(&self, ctx: &Accountability, file_id: &str) -> Result<ContentStream>;
}

/// Wrap an already materialised buffer as a content stream
pub fn content_from_bytes(bytes: Vec<u8>) -> ContentStream {
    Box::pin(stream::iter(vec![Ok(bytes)]))
}

/// Wrap a list of chunks, each of which may fail, as a content stream
pub fn content_from_chunks(chunks: Vec<Result<Vec<u8>>>) -> ContentStream {
    Box::pin(stream::iter(chunks))
}
