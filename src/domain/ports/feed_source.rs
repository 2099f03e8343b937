use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Category, FeedEntry};

/// Source of raw feed entries for a category.
///
/// Implementations issue exactly one upstream call per invocation and never
/// retry. Transport failures, timeouts, non-success statuses and unparseable
/// bodies are all reported as [`DomainError::UpstreamUnavailable`].
///
/// [`DomainError::UpstreamUnavailable`]: crate::domain::errors::DomainError::UpstreamUnavailable
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the most recent submissions for `category`, newest first.
    async fn fetch_entries(&self, category: &Category) -> DomainResult<Vec<FeedEntry>>;
}
