//! Batch refresh of the per-category paper cache.
//!
//! Every category is fetched in its own task; tasks are joined before the run
//! completes. A category whose fetch fails is logged and skipped, leaving its
//! previous document in place. Siblings are never affected.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinSet;

use crate::domain::models::Category;
use crate::domain::ports::PaperCache;
use crate::services::paper_service::PaperService;

/// Stage at which a category failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Fetch,
    Store,
}

/// A category written during a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryWritten {
    pub category: String,
    pub papers: usize,
}

/// A category that was not written during a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFailed {
    pub category: String,
    pub stage: FailureStage,
    pub error: String,
}

/// Outcome of one refresh run.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshReport {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub written: Vec<CategoryWritten>,
    pub failed: Vec<CategoryFailed>,
    /// Tasks that panicked; their category is unknown.
    pub aborted: usize,
}

impl RefreshReport {
    pub fn total_papers(&self) -> usize {
        self.written.iter().map(|w| w.papers).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.aborted == 0
    }
}

/// Refreshes cached category documents from the feed.
#[derive(Clone)]
pub struct RefreshService {
    papers: PaperService,
    cache: Arc<dyn PaperCache>,
}

impl RefreshService {
    pub fn new(papers: PaperService, cache: Arc<dyn PaperCache>) -> Self {
        Self { papers, cache }
    }

    /// Refresh `categories` with the recency window ending now.
    pub async fn run(&self, categories: Vec<Category>) -> RefreshReport {
        self.run_at(categories, Utc::now()).await
    }

    /// Refresh `categories` with the recency window ending at `now`.
    ///
    /// All categories share the same cutoff.
    pub async fn run_at(&self, categories: Vec<Category>, now: DateTime<Utc>) -> RefreshReport {
        let clock = Instant::now();
        tracing::info!(categories = categories.len(), "refresh started");

        let mut tasks = JoinSet::new();
        for category in categories {
            let papers = self.papers.clone();
            tasks.spawn(async move {
                let result = papers.recent_papers_at(&category, now).await;
                (category, result)
            });
        }

        let mut written = Vec::new();
        let mut failed = Vec::new();
        let mut aborted = 0usize;

        while let Some(joined) = tasks.join_next().await {
            let (category, result) = match joined {
                Ok(pair) => pair,
                Err(e) => {
                    aborted += 1;
                    tracing::error!(error = %e, "refresh task aborted");
                    continue;
                }
            };

            let records = match result {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        category = %category,
                        error = %e,
                        "fetch failed; keeping previous document"
                    );
                    failed.push(CategoryFailed {
                        category: category.to_string(),
                        stage: FailureStage::Fetch,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            match self.cache.put(&category, &records).await {
                Ok(()) => written.push(CategoryWritten {
                    category: category.to_string(),
                    papers: records.len(),
                }),
                Err(e) => {
                    tracing::warn!(category = %category, error = %e, "failed to write document");
                    failed.push(CategoryFailed {
                        category: category.to_string(),
                        stage: FailureStage::Store,
                        error: e.to_string(),
                    });
                }
            }
        }

        written.sort_by(|a, b| a.category.cmp(&b.category));
        failed.sort_by(|a, b| a.category.cmp(&b.category));

        let report = RefreshReport {
            started_at: now,
            duration_ms: u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX),
            written,
            failed,
            aborted,
        };
        tracing::info!(
            written = report.written.len(),
            failed = report.failed.len(),
            aborted = report.aborted,
            papers = report.total_papers(),
            duration_ms = report.duration_ms,
            "refresh finished"
        );
        report
    }
}
