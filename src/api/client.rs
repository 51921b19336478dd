use anyhow::Context;
use async_trait::async_trait;
use futures::StreamExt;
use log::debug;
use reqwest::{RequestBuilder, Response};
use std::sync::Arc;
use std::time::Duration;

use super::constants::{self, headers};
use super::query::{Query, QueryBuilder, QueryResponse, result};
use crate::icons::{
    Accountability, ContentReader, ContentStream, FileReader, FileRecord, Folder, FolderReader, IconRegistry,
    RegistrySettings,
};

/// REST client for the host platform's folder, file and asset endpoints
#[derive(Clone)]
pub struct DirectusClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl DirectusClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)           // Max idle connections per host
            .pool_idle_timeout(Duration::from_secs(90))  // Keep connections alive for 90s
            .timeout(Duration::from_secs(60))     // Request timeout
            .connect_timeout(Duration::from_secs(10))    // Connection timeout
            .user_agent(headers::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(base_url, http_client))
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Registry reading folders, files and content through this client
    pub fn into_registry(self, settings: RegistrySettings) -> IconRegistry {
        let client = Arc::new(self);
        IconRegistry::new(client.clone(), client.clone(), client, settings)
    }

    /// Execute a collection read
    pub async fn execute_query(&self, ctx: &Accountability, query: &Query) -> anyhow::Result<QueryResponse> {
        let url = constants::collection_endpoint(&self.base_url, &query.collection);
        debug!("[{}] GET {} {:?}", ctx.correlation_id, url, query.to_query_params());

        let request = self
            .http_client
            .get(&url)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .query(&query.to_query_params());

        let response = authorize(request, ctx)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        let response = ensure_success(response, &url).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {}", url))?;
        QueryResponse::from_json(json)
    }
}

fn authorize(request: RequestBuilder, ctx: &Accountability) -> RequestBuilder {
    match &ctx.token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn ensure_success(response: Response, url: &str) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = result::error_message(&body).unwrap_or(body);
    anyhow::bail!("Host request to {} failed with status {}: {}", url, status, message)
}

#[async_trait]
impl FolderReader for DirectusClient {
    async fn find_by_name(&self, ctx: &Accountability, name: &str, limit: usize) -> anyhow::Result<Vec<Folder>> {
        let query = QueryBuilder::folders_named(name, limit).build();
        self.execute_query(ctx, &query).await?.into_records()
    }

    async fn children_of(&self, ctx: &Accountability, parent_id: &str) -> anyhow::Result<Vec<Folder>> {
        let query = QueryBuilder::folders_under(parent_id).build();
        self.execute_query(ctx, &query).await?.into_records()
    }
}

#[async_trait]
impl FileReader for DirectusClient {
    async fn files_in(
        &self,
        ctx: &Accountability,
        folder_ids: &[String],
        content_type: &str,
    ) -> anyhow::Result<Vec<FileRecord>> {
        let query = QueryBuilder::files_in(folder_ids, content_type).build();
        self.execute_query(ctx, &query).await?.into_records()
    }
}

#[async_trait]
impl ContentReader for DirectusClient {
    async fn open(&self, ctx: &Accountability, file_id: &str) -> anyhow::Result<ContentStream> {
        let url = constants::asset_endpoint(&self.base_url, file_id);
        debug!("[{}] GET {}", ctx.correlation_id, url);

        let response = authorize(self.http_client.get(&url), ctx)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        let response = ensure_success(response, &url).await?;

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(anyhow::Error::from));
        Ok(Box::pin(stream))
    }
}
