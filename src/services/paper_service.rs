//! Live paper lookup: fetch, project, filter.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Category, PaperRecord};
use crate::domain::ports::FeedSource;
use crate::services::projector::project;
use crate::services::recency::{RecencyFilter, DEFAULT_LOOKBACK_DAYS};

/// Fetches a category from the feed and returns its recent papers.
///
/// Used directly by the live serving mode and by the refresh job.
#[derive(Clone)]
pub struct PaperService {
    feed: Arc<dyn FeedSource>,
    lookback: Duration,
}

impl PaperService {
    pub fn new(feed: Arc<dyn FeedSource>) -> Self {
        Self::with_lookback_days(feed, DEFAULT_LOOKBACK_DAYS)
    }

    /// Out-of-range widths saturate to the largest representable window.
    pub fn with_lookback_days(feed: Arc<dyn FeedSource>, days: i64) -> Self {
        Self {
            feed,
            lookback: Duration::try_days(days).unwrap_or(Duration::MAX),
        }
    }

    /// Recent papers for `category`, with the window ending now.
    pub async fn recent_papers(&self, category: &Category) -> DomainResult<Vec<PaperRecord>> {
        self.recent_papers_at(category, Utc::now()).await
    }

    /// Recent papers for `category`, with the window ending at `now`.
    ///
    /// Upstream failures propagate. Entries that fail projection are logged
    /// and skipped; the rest of the page is still returned, in feed order.
    pub async fn recent_papers_at(
        &self,
        category: &Category,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<PaperRecord>> {
        let filter = RecencyFilter::new(now, self.lookback);
        let entries = self.feed.fetch_entries(category).await?;
        let total = entries.len();

        let mut papers = Vec::with_capacity(total);
        let mut malformed = 0usize;
        for entry in entries {
            match project(entry) {
                Ok(record) if filter.keep(record.published) => papers.push(record),
                Ok(_) => {}
                Err(e) => {
                    malformed += 1;
                    tracing::warn!(category = %category, error = %e, "skipping malformed entry");
                }
            }
        }

        tracing::debug!(
            category = %category,
            total,
            kept = papers.len(),
            malformed,
            cutoff = %filter.cutoff(),
            "filtered feed entries"
        );
        Ok(papers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::models::FeedEntry;
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct StaticFeed(DomainResult<Vec<FeedEntry>>);

    #[async_trait]
    impl FeedSource for StaticFeed {
        async fn fetch_entries(&self, _category: &Category) -> DomainResult<Vec<FeedEntry>> {
            match &self.0 {
                Ok(entries) => Ok(entries.clone()),
                Err(e) => Err(DomainError::UpstreamUnavailable(e.to_string())),
            }
        }
    }

    fn entry(title: &str, published: &str) -> FeedEntry {
        FeedEntry {
            id: Some(format!("id-{title}")),
            title: Some(title.to_string()),
            authors: vec!["Author".to_string()],
            summary: Some("summary".to_string()),
            published: Some(published.to_string()),
            link: Some(format!("http://arxiv.org/abs/{title}")),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_filters_old_and_malformed_entries() {
        let mut broken = entry("broken", "2025-06-14T00:00:00Z");
        broken.summary = None;
        let feed = StaticFeed(Ok(vec![
            entry("fresh", "2025-06-13T12:00:00Z"),
            broken,
            entry("boundary", "2025-06-08T12:00:00Z"),
            entry("stale", "2025-06-05T12:00:00Z"),
        ]));
        let service = PaperService::new(Arc::new(feed));

        let papers = service
            .recent_papers_at(&Category::parse("cs.LG").unwrap(), now())
            .await
            .unwrap();
        let titles: Vec<_> = papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["fresh", "boundary"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let feed = StaticFeed(Err(DomainError::UpstreamUnavailable("timeout".to_string())));
        let service = PaperService::new(Arc::new(feed));

        let err = service
            .recent_papers_at(&Category::parse("cs.AI").unwrap(), now())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_huge_lookback_keeps_everything() {
        let feed = StaticFeed(Ok(vec![entry("ancient", "1991-08-14T00:00:00Z")]));
        let service = PaperService::with_lookback_days(Arc::new(feed), i64::MAX);

        let papers = service
            .recent_papers_at(&Category::parse("cs.LG").unwrap(), now())
            .await
            .unwrap();
        assert_eq!(papers.len(), 1);
    }

    #[tokio::test]
    async fn test_custom_lookback() {
        let feed = StaticFeed(Ok(vec![entry("two-days", "2025-06-13T12:00:00Z")]));
        let service = PaperService::with_lookback_days(Arc::new(feed), 1);

        let papers = service
            .recent_papers_at(&Category::parse("cs.LG").unwrap(), now())
            .await
            .unwrap();
        assert!(papers.is_empty());
    }
}
