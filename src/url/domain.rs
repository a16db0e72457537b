use crate::{UrlError, UrlResult};
use url::Url;

/// Substring used to decide whether a discovered link stays on the crawled site
///
/// The filter is the seed's lowercase hostname (no port). A link is accepted
/// when its absolute form *contains* the filter anywhere, so
/// `https://example.com.evil.test/` or `https://other.test/?ref=example.com`
/// both pass for a seed on `example.com`. This looseness is intentional and
/// kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFilter(String);

impl HostFilter {
    /// Builds the filter from the seed URL's host
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use site_census::url::HostFilter;
    ///
    /// let seed = Url::parse("https://Example.COM:8443/start").unwrap();
    /// let filter = HostFilter::from_seed(&seed).unwrap();
    /// assert_eq!(filter.as_str(), "example.com");
    /// ```
    pub fn from_seed(seed: &Url) -> UrlResult<Self> {
        extract_host(seed)
            .map(Self)
            .ok_or_else(|| UrlError::MissingHost(seed.to_string()))
    }

    /// Builds a filter from a raw substring
    pub fn new(filter: impl Into<String>) -> Self {
        Self(filter.into())
    }

    /// Returns true if the absolute URL contains the filter substring
    pub fn matches(&self, absolute_url: &str) -> bool {
        absolute_url.contains(self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the lowercase host from a URL, without port
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_lowercase())
}

/// Convenience wrapper: parses a seed and returns its host filter
pub fn host_filter_for(seed: &str) -> UrlResult<HostFilter> {
    let url = Url::parse(seed).map_err(|e| UrlError::Parse(e.to_string()))?;
    HostFilter::from_seed(&url)
}
