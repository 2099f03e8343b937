//! HTTP server adapters.

pub mod papers_http;

pub use papers_http::{
    CategoriesResponse, CategoryPapersResponse, ErrorResponse, PapersHttpConfig,
    PapersHttpServer, WelcomeResponse,
};
