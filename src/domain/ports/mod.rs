//! Port trait definitions (Hexagonal Architecture)
//!
//! - FeedSource: upstream preprint feed
//! - PaperCache: per-category document store
//!
//! Services depend only on these traits so tests can substitute fakes.

pub mod feed_source;
pub mod paper_cache;

pub use feed_source::FeedSource;
pub use paper_cache::PaperCache;
