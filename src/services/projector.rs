//! Projection of raw feed entries into paper records.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{FeedEntry, PaperRecord};
use crate::services::recency::parse_published;

/// Map a feed entry to a [`PaperRecord`].
///
/// Title, summary, published and link are required; a missing or unusable
/// field fails the entry with [`DomainError::MalformedEntry`]. An entry with
/// no authors is valid.
pub fn project(entry: FeedEntry) -> DomainResult<PaperRecord> {
    let label = entry.id.clone().unwrap_or_else(|| "<no id>".to_string());
    let missing = |field: &str| DomainError::MalformedEntry(format!("{label}: missing {field}"));

    let title = entry
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| missing("title"))?;
    let summary = entry.summary.ok_or_else(|| missing("summary"))?;
    let link = entry
        .link
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| missing("link"))?;
    let raw_published = entry.published.ok_or_else(|| missing("published"))?;
    let published = parse_published(&raw_published).ok_or_else(|| {
        DomainError::MalformedEntry(format!("{label}: unparseable published date {raw_published:?}"))
    })?;

    Ok(PaperRecord {
        title,
        authors: entry.authors,
        summary,
        published,
        link,
    })
}
