use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::{FutureExt as _, StreamExt as _, future::BoxFuture};
use serde_json::Value;

use crate::{
    config::NotionConfig,
    content::{
        model::{ContentBlock, DiaryEntry, sort_newest_first},
        notion::{PageHeader, Paginated, RawBlock, map_block, page_header},
    },
    foundation::error::{DiaryError, DiaryResult},
};

/// Page bodies fetched concurrently while keeping listing order.
const BODY_FETCH_CONCURRENCY: usize = 4;

/// Anything that can produce the full, newest-first entry list.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch every publishable entry, sorted by date descending.
    async fn fetch_all(&self) -> DiaryResult<Vec<DiaryEntry>>;
}

/// Notion data source backed entries.
#[derive(Clone, Debug)]
pub struct NotionSource {
    client: reqwest::Client,
    config: NotionConfig,
}

impl NotionSource {
    /// Build a source with its own HTTP client.
    pub fn new(config: NotionConfig) -> DiaryResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sketch-diary/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a source around an existing client.
    pub fn with_client(client: reqwest::Client, config: NotionConfig) -> Self {
        Self { client, config }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/v1/{}", self.config.api_base.trim_end_matches('/'), path);
        let mut req = self
            .client
            .request(method, url)
            .header("Notion-Version", &self.config.version);
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<T: serde::de::DeserializeOwned>(req: reqwest::RequestBuilder) -> DiaryResult<T> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
                .unwrap_or(body);
            return Err(DiaryError::content(format!("notion responded {status}: {message}")));
        }
        Ok(resp.json::<T>().await?)
    }

    async fn query_pages(&self, data_source_id: &str) -> DiaryResult<Vec<Value>> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut body = serde_json::json!({ "page_size": self.config.page_size });
            if let Some(c) = &cursor {
                body["start_cursor"] = Value::from(c.as_str());
            }
            let req = self
                .request(
                    reqwest::Method::POST,
                    &format!("data_sources/{data_source_id}/query"),
                )
                .json(&body);
            let page: Paginated<Value> = Self::send(req).await?;
            cursor = page.continuation().map(str::to_owned);
            pages.extend(page.results);
            if cursor.is_none() {
                break;
            }
        }
        Ok(pages)
    }

    async fn list_children(&self, block_id: &str) -> DiaryResult<Vec<RawBlock>> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut query = vec![("page_size", self.config.page_size.to_string())];
            if let Some(c) = &cursor {
                query.push(("start_cursor", c.clone()));
            }
            let req = self
                .request(reqwest::Method::GET, &format!("blocks/{block_id}/children"))
                .query(&query);
            let page: Paginated<Value> = Self::send(req).await?;
            cursor = page.continuation().map(str::to_owned);
            for raw in page.results {
                match serde_json::from_value::<RawBlock>(raw) {
                    Ok(block) => blocks.push(block),
                    Err(err) => {
                        tracing::debug!(%err, parent = block_id, "dropping undecodable block")
                    }
                }
            }
            if cursor.is_none() {
                break;
            }
        }
        Ok(blocks)
    }

    fn flatten_into<'a>(
        &'a self,
        block_id: &'a str,
        depth: u32,
        out: &'a mut Vec<ContentBlock>,
    ) -> BoxFuture<'a, DiaryResult<()>> {
        async move {
            for block in self.list_children(block_id).await? {
                match map_block(&block) {
                    Some(mapped) => out.push(mapped),
                    None => tracing::debug!(
                        kind = %block.kind,
                        id = %block.id,
                        "dropping unsupported block"
                    ),
                }
                if block.has_children && depth < self.config.max_block_depth {
                    self.flatten_into(&block.id, depth + 1, out).await?;
                }
            }
            Ok(())
        }
        .boxed()
    }

    async fn load_entry(&self, header: PageHeader) -> DiaryResult<DiaryEntry> {
        let mut content_blocks = Vec::new();
        self.flatten_into(&header.id, 1, &mut content_blocks).await?;
        Ok(DiaryEntry {
            id: header.id,
            date: header.date,
            sketch_id: header.sketch_id,
            thumbnail_url: header.thumbnail_url,
            content_blocks,
        })
    }
}

#[async_trait]
impl ContentSource for NotionSource {
    #[tracing::instrument(skip(self), fields(api = %self.config.api_base))]
    async fn fetch_all(&self) -> DiaryResult<Vec<DiaryEntry>> {
        let data_source_id = self.config.require_data_source()?.to_owned();
        let pages = self.query_pages(&data_source_id).await?;
        let total = pages.len();

        let headers: Vec<PageHeader> = pages
            .iter()
            .filter_map(|p| page_header(p, &self.config.properties))
            .collect();
        tracing::debug!(total, usable = headers.len(), "queried data source");

        let mut entries: Vec<DiaryEntry> = futures::stream::iter(headers)
            .map(|h| self.load_entry(h))
            .buffered(BODY_FETCH_CONCURRENCY)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<DiaryResult<_>>()?;

        sort_newest_first(&mut entries);
        tracing::info!(entries = entries.len(), "fetched diary entries");
        Ok(entries)
    }
}

/// Entries read from a JSON snapshot (an array of [`DiaryEntry`]).
#[derive(Clone, Debug)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    /// Source reading `path` on every fetch.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ContentSource for SnapshotSource {
    async fn fetch_all(&self) -> DiaryResult<Vec<DiaryEntry>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let mut entries: Vec<DiaryEntry> = serde_json::from_slice(&bytes)?;
        sort_newest_first(&mut entries);
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/source.rs"]
mod tests;
