//! Better Papers - recent arXiv papers by category
//!
//! Fetches the newest preprints for a subject category from the arXiv export
//! API, keeps the ones published in the last week, and serves them as JSON.
//! Two serving modes share one HTTP surface:
//!
//! - **live**: every request queries arXiv
//! - **cached**: requests read per-category documents that a batch refresh
//!   job writes to an object store (S3, local filesystem, or memory)
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): paper and category models, errors, ports
//! - **Service Layer** (`services`): recency filter, projection, refresh job
//! - **Adapters** (`adapters`): arXiv client, object store cache, HTTP API
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use better_papers::adapters::arxiv::ArxivClient;
//! use better_papers::domain::models::{Category, FeedConfig};
//! use better_papers::services::PaperService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(&FeedConfig::default())?;
//!     let service = PaperService::new(Arc::new(client));
//!     let papers = service.recent_papers(&Category::parse("cs.LG")?).await?;
//!     println!("{} recent papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{Category, Config, PaperRecord, ServingMode};
pub use domain::ports::{FeedSource, PaperCache};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{PaperService, RefreshReport, RefreshService};
