//! Syntactic validation of submitted URLs.

use thiserror::Error;
use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, Error)]
pub enum UrlCheckError {
    #[error("not an absolute URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("scheme '{0}' is not allowed, only http/https")]
    Scheme(String),
    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is a well-formed absolute http/https URL with a host.
///
/// Purely syntactic: no network reachability check is performed, and the
/// input is stored verbatim on success (no normalization).
pub fn validate_web_url(input: &str) -> Result<(), UrlCheckError> {
    let url = Url::parse(input)?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlCheckError::Scheme(other.to_string())),
    }

    if url.host_str().is_none() {
        return Err(UrlCheckError::MissingHost);
    }

    Ok(())
}
