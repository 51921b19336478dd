//! In-memory host used by the integration tests
//!
//! Implements all three reader traits over plain vectors and records which
//! file contents were opened and which tokens were presented.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use custom_svg_icons::icons::readers::{content_from_bytes, content_from_chunks};
use custom_svg_icons::icons::{
    Accountability, ContentReader, ContentStream, FileReader, FileRecord, Folder, FolderReader, IconRegistry,
    RegistrySettings, SVG_CONTENT_TYPE,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ROOT_ID: &str = "root";

#[derive(Debug, Clone)]
pub enum Content {
    Bytes(Vec<u8>),
    /// Chunks delivered lazily; the last one fails
    BrokenStream(Vec<Vec<u8>>),
    /// Opening the content fails outright
    Unreadable,
}

#[derive(Default)]
pub struct InMemoryHost {
    pub folders: Vec<Folder>,
    pub files: Vec<FileRecord>,
    pub contents: HashMap<String, Content>,
    pub fail_file_queries: bool,
    pub opened: Mutex<Vec<String>>,
    pub tokens_seen: Mutex<Vec<Option<String>>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with the root icon folder already present
    pub fn with_root() -> Self {
        let mut host = Self::new();
        host.folders.push(Folder::new(ROOT_ID, "Custom SVG Icons", None));
        host
    }

    pub fn subfolder(mut self, id: &str, name: &str) -> Self {
        self.folders.push(Folder::new(id, name, Some(ROOT_ID)));
        self
    }

    /// Add a readable SVG file
    pub fn svg(self, id: &str, folder: &str, filename: &str, title: Option<&str>, description: Option<&str>) -> Self {
        let svg = format!("<svg id=\"{}\"></svg>", id);
        self.file_with_content(id, folder, filename, title, description, SVG_CONTENT_TYPE, Content::Bytes(svg.into_bytes()))
    }

    pub fn file_with_content(
        mut self,
        id: &str,
        folder: &str,
        filename: &str,
        title: Option<&str>,
        description: Option<&str>,
        content_type: &str,
        content: Content,
    ) -> Self {
        self.files.push(FileRecord {
            id: id.to_string(),
            filename_download: filename.to_string(),
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            content_type: Some(content_type.to_string()),
            folder: Some(folder.to_string()),
        });
        self.contents.insert(id.to_string(), content);
        self
    }

    pub fn opened(&self) -> Vec<String> {
        let mut opened = self.opened.lock().unwrap().clone();
        opened.sort();
        opened
    }

    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.tokens_seen.lock().unwrap().clone()
    }

    fn record(&self, ctx: &Accountability) {
        self.tokens_seen.lock().unwrap().push(ctx.token.clone());
    }
}

#[async_trait]
impl FolderReader for InMemoryHost {
    async fn find_by_name(&self, ctx: &Accountability, name: &str, limit: usize) -> Result<Vec<Folder>> {
        self.record(ctx);
        Ok(self
            .folders
            .iter()
            .filter(|folder| folder.name == name)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn children_of(&self, ctx: &Accountability, parent_id: &str) -> Result<Vec<Folder>> {
        self.record(ctx);
        Ok(self
            .folders
            .iter()
            .filter(|folder| folder.parent.as_deref() == Some(parent_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FileReader for InMemoryHost {
    async fn files_in(&self, ctx: &Accountability, folder_ids: &[String], content_type: &str) -> Result<Vec<FileRecord>> {
        self.record(ctx);
        if self.fail_file_queries {
            anyhow::bail!("file store unavailable");
        }
        Ok(self
            .files
            .iter()
            .filter(|file| {
                file.content_type.as_deref() == Some(content_type)
                    && file
                        .folder
                        .as_ref()
                        .is_some_and(|folder| folder_ids.contains(folder))
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ContentReader for InMemoryHost {
    async fn open(&self, ctx: &Accountability, file_id: &str) -> Result<ContentStream> {
        self.record(ctx);
        self.opened.lock().unwrap().push(file_id.to_string());
        match self.contents.get(file_id) {
            Some(Content::Bytes(bytes)) => Ok(content_from_bytes(bytes.clone())),
            Some(Content::BrokenStream(chunks)) => {
                let mut items: Vec<Result<Vec<u8>>> = chunks.iter().cloned().map(Ok).collect();
                items.push(Err(anyhow::anyhow!("stream reset")));
                Ok(content_from_chunks(items))
            }
            Some(Content::Unreadable) => anyhow::bail!("asset storage offline"),
            None => anyhow::bail!("no content for {}", file_id),
        }
    }
}

pub fn registry(host: Arc<InMemoryHost>) -> IconRegistry {
    IconRegistry::new(host.clone(), host.clone(), host, RegistrySettings::default())
}

pub fn ctx() -> Accountability {
    Accountability::new(Some("test-token".to_string()), "test")
}
