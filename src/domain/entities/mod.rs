//! Core business entities.

pub mod url_mapping;

pub use url_mapping::UrlMapping;
