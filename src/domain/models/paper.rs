use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One paper as it appears in the upstream feed, before normalization.
///
/// Every field is optional because the feed gives no guarantees; the
/// projector decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub summary: Option<String>,
    /// Raw `published` text, parsed later by the recency filter.
    pub published: Option<String>,
    pub link: Option<String>,
}

/// A normalized paper record, as served and cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub published: DateTime<Utc>,
    pub link: String,
}
