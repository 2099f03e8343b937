//! Object store adapters.

pub mod paper_cache;

pub use paper_cache::ObjectStorePaperCache;
