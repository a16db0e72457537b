//! URL handling module for Site-Census
//!
//! This module resolves discovered hrefs against their page, derives the
//! host filter from the seed, and validates seed URLs.

mod domain;
mod resolve;

use crate::{UrlError, UrlResult};
use ::url::Url;

// Re-export main functions
pub use domain::{extract_host, host_filter_for, HostFilter};
pub use resolve::resolve_link;

/// Parses a seed URL, requiring an HTTP(S) scheme and a host
///
/// The returned URL's serialization is the seed's crawl identity, so
/// `https://example.com` and `https://example.com/` are the same seed.
///
/// # Examples
///
/// ```
/// use site_census::url::parse_seed;
///
/// let seed = parse_seed("https://example.com").unwrap();
/// assert_eq!(seed.as_str(), "https://example.com/");
/// assert!(parse_seed("ftp://example.com/").is_err());
/// ```
pub fn parse_seed(seed: &str) -> UrlResult<Url> {
    let url = Url::parse(seed).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if extract_host(&url).is_none() {
        return Err(UrlError::MissingHost(seed.to_string()));
    }

    Ok(url)
}
