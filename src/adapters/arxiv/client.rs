use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::atom::parse_atom_feed;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Category, FeedConfig, FeedEntry};
use crate::domain::ports::FeedSource;

const USER_AGENT: &str = concat!("better-papers/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the arXiv export API.
///
/// One GET per category, newest submissions first, a single fixed-size page,
/// bounded by the configured timeout. No retries.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    http: Client,
    base_url: String,
    page_size: usize,
}

impl ArxivClient {
    pub fn new(config: &FeedConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::UpstreamUnavailable(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            page_size: config.page_size,
        })
    }
}

#[async_trait]
impl FeedSource for ArxivClient {
    async fn fetch_entries(&self, category: &Category) -> DomainResult<Vec<FeedEntry>> {
        let search_query = category.search_query();
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("search_query", search_query.as_str())])
            .query(&[("start", 0), ("max_results", self.page_size)])
            .query(&[("sortBy", "submittedDate"), ("sortOrder", "descending")])
            .header(ACCEPT, "application/atom+xml, application/xml;q=0.9, text/xml;q=0.8")
            .send()
            .await
            .map_err(|e| {
                DomainError::UpstreamUnavailable(format!("arXiv request for {category} failed: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "arXiv returned HTTP {status} for {category}"
            )));
        }

        let body = resp.text().await.map_err(|e| {
            DomainError::UpstreamUnavailable(format!("arXiv response for {category} unreadable: {e}"))
        })?;
        let entries = parse_atom_feed(&body)?;
        tracing::debug!(category = %category, entries = entries.len(), "fetched feed page");
        Ok(entries)
    }
}
