//! Service layer: the fetch/filter/project pipeline and the refresh job.

pub mod paper_service;
pub mod projector;
pub mod recency;
pub mod refresh_service;

pub use paper_service::PaperService;
pub use projector::project;
pub use recency::{parse_published, RecencyFilter, DEFAULT_LOOKBACK_DAYS};
pub use refresh_service::{
    CategoryFailed, CategoryWritten, FailureStage, RefreshReport, RefreshService,
};
