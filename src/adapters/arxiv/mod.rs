//! arXiv export API adapter.

pub mod atom;
pub mod client;

pub use atom::parse_atom_feed;
pub use client::ArxivClient;
