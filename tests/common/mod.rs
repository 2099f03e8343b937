//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use better_papers::domain::models::{FeedConfig, PaperRecord};

/// Path the mock feed server answers on
pub const FEED_PATH: &str = "/api/query";

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Feed settings pointing at a mock server, with a short timeout
pub fn feed_config(server_uri: &str) -> FeedConfig {
    FeedConfig {
        base_url: format!("{server_uri}{FEED_PATH}"),
        timeout_secs: 2,
        ..FeedConfig::default()
    }
}

/// One `<entry>` for [`atom_feed`]
#[derive(Debug, Clone)]
pub struct TestEntry {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub published: DateTime<Utc>,
    pub authors: Vec<String>,
    pub link: String,
}

impl TestEntry {
    /// Entry published `days_ago` days before `now`
    pub fn days_old(id: &str, title: &str, now: DateTime<Utc>, days_ago: i64) -> Self {
        Self {
            id: format!("http://arxiv.org/abs/{id}"),
            title: title.to_string(),
            summary: format!("Abstract of {title}."),
            published: now - Duration::days(days_ago),
            authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
            link: format!("http://arxiv.org/abs/{id}"),
        }
    }

    /// The record this entry should project to
    pub fn expected_record(&self) -> PaperRecord {
        PaperRecord {
            title: self.title.clone(),
            authors: self.authors.clone(),
            summary: self.summary.clone(),
            published: truncate_to_seconds(self.published),
            link: self.link.clone(),
        }
    }
}

/// Feed timestamps carry whole seconds only
pub fn truncate_to_seconds(ts: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_opt(ts.timestamp(), 0)
        .single()
        .expect("valid timestamp")
}

/// Render an Atom document the way the arXiv export API does
pub fn atom_feed(entries: &[TestEntry]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title type="html">ArXiv Query: search_query=cat:cs.LG</title>
  <id>http://arxiv.org/api/test</id>
"#,
    );
    for entry in entries {
        let authors: String = entry
            .authors
            .iter()
            .map(|a| format!("    <author><name>{a}</name></author>\n"))
            .collect();
        xml.push_str(&format!(
            r#"  <entry>
    <id>{id}</id>
    <published>{published}</published>
    <updated>{published}</updated>
    <title>{title}</title>
    <summary>  {summary}
    </summary>
{authors}    <link href="{link}" rel="alternate" type="text/html"/>
    <link title="pdf" href="{link}.pdf" rel="related" type="application/pdf"/>
    <arxiv:primary_category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
"#,
            id = entry.id,
            published = entry.published.to_rfc3339_opts(SecondsFormat::Secs, true),
            title = entry.title,
            summary = entry.summary,
            authors = authors,
            link = entry.link,
        ));
    }
    xml.push_str("</feed>\n");
    xml
}

/// A record with fixed content published at `published`
pub fn paper(title: &str, published: DateTime<Utc>) -> PaperRecord {
    PaperRecord {
        title: title.to_string(),
        authors: vec!["Grace Hopper".to_string()],
        summary: format!("Summary of {title}"),
        published,
        link: format!("http://arxiv.org/abs/{}", title.replace(' ', "-")),
    }
}

/// Issue a GET against the router and decode the JSON body
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}
