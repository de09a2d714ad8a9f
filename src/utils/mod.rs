//! Helper functions for URL validation and request handling.
//!
//! - [`url_check`] - Syntactic validation of submitted URLs
//! - [`base_url`] - Base URL reconstruction from request headers

pub mod base_url;
pub mod url_check;
