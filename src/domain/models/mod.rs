pub mod category;
pub mod config;
pub mod paper;

pub use category::{
    catalog_categories, catalog_entry, Category, CategoryInfo, Field, CATALOG, DOCUMENT_SUFFIX,
};
pub use config::{
    Config, FeedConfig, LoggingConfig, ServerConfig, ServingMode, StoreBackend, StoreConfig,
};
pub use paper::{FeedEntry, PaperRecord};
