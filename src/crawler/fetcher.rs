//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests to fetch page content
//! - Rejecting responses whose content type maps to an excluded extension
//! - Error classification

use crate::config::{CrawlerConfig, UserAgentConfig};
use reqwest::Client;
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Why a page could not be fetched
///
/// Every variant is branch-local: the engine logs it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, TLS error, unsupported scheme...
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    /// Server answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Declared content type maps to an excluded extension
    #[error("unsupported content type '{content_type}' (.{extension})")]
    UnsupportedContent {
        content_type: String,
        extension: String,
    },

    #[error("failed to read body: {0}")]
    Body(String),
}

/// Source of page bytes
///
/// The crawl engine is generic over this so that traversal can be exercised
/// against an in-memory site as well as a live server.
pub trait Fetcher {
    /// Fetches `url` and returns the raw response body
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Crawler settings (timeouts are taken from here)
///
/// # Example
///
/// ```no_run
/// use site_census::config::load_config;
/// use site_census::crawler::build_http_client;
/// use std::path::Path;
///
/// let config = load_config(Path::new("census.toml")).unwrap();
/// let client = build_http_client(&config.user_agent, &config.crawler).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(format_user_agent(user_agent))
        .timeout(Duration::from_secs(crawler.request_timeout))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Format: CrawlerName/Version (+ContactURL; ContactEmail)
pub fn format_user_agent(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    excluded_extensions: HashSet<String>,
}

impl HttpFetcher {
    pub fn new(client: Client, excluded_extensions: impl IntoIterator<Item = String>) -> Self {
        Self {
            client,
            excluded_extensions: excluded_extensions.into_iter().collect(),
        }
    }

    /// Builds the client and fetcher straight from configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = build_http_client(user_agent, crawler)?;
        Ok(Self::new(client, crawler.excluded_extensions.iter().cloned()))
    }

    /// Returns the first extension of a content type that is excluded, if any
    fn excluded_extension(&self, content_type: &str) -> Option<&'static str> {
        extensions_for_content_type(content_type)
            .iter()
            .copied()
            .find(|ext| self.excluded_extensions.contains(*ext))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if let Some(extension) = self.excluded_extension(&content_type) {
            return Err(FetchError::UnsupportedContent {
                content_type,
                extension: extension.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(body.to_vec())
    }
}

fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Network(format!("connection failed: {}", e))
    } else {
        FetchError::Network(e.to_string())
    }
}

/// Maps a Content-Type header value to every file extension it is known by
///
/// Parameters (`; charset=...`) and case are ignored. Types without a
/// well-known extension (including `text/html`) map to an empty slice.
///
/// # Example
///
/// ```
/// use site_census::crawler::extensions_for_content_type;
///
/// assert_eq!(extensions_for_content_type("image/jpeg"), &["jpg", "jpeg", "jpe"]);
/// assert!(extensions_for_content_type("text/html; charset=utf-8").is_empty());
/// ```
pub fn extensions_for_content_type(content_type: &str) -> &'static [&'static str] {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/pdf" => &["pdf"],
        "application/msword" => &["doc", "dot"],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => &["docx"],
        "application/vnd.ms-excel" => &["xls", "xlt"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => &["xlsx"],
        "application/vnd.ms-powerpoint" => &["ppt", "pps"],
        "application/vnd.openxmlformats-officedocument.presentationml.presentation" => &["pptx"],
        "application/vnd.oasis.opendocument.text" => &["odt"],
        "application/rtf" | "text/rtf" => &["rtf"],
        "application/zip" | "application/x-zip-compressed" => &["zip"],
        "application/vnd.rar" | "application/x-rar-compressed" => &["rar"],
        "application/gzip" | "application/x-gzip" => &["gz", "tgz"],
        "application/x-tar" => &["tar"],
        "application/x-7z-compressed" => &["7z"],
        "application/x-bzip2" => &["bz2", "tbz2"],
        "image/png" => &["png"],
        "image/jpeg" | "image/pjpeg" => &["jpg", "jpeg", "jpe"],
        "image/gif" => &["gif"],
        "image/svg+xml" => &["svg", "svgz"],
        "image/webp" => &["webp"],
        "image/x-icon" | "image/vnd.microsoft.icon" => &["ico"],
        "image/bmp" => &["bmp"],
        "image/tiff" => &["tiff", "tif"],
        "text/css" => &["css"],
        "text/javascript" | "application/javascript" | "application/x-javascript" => {
            &["js", "mjs"]
        }
        "application/json" => &["json"],
        "font/woff" | "application/font-woff" => &["woff"],
        "font/woff2" => &["woff2"],
        "font/ttf" | "application/x-font-ttf" => &["ttf"],
        "font/otf" => &["otf"],
        "application/vnd.ms-fontobject" => &["eot"],
        "application/x-msdownload" | "application/vnd.microsoft.portable-executable" => {
            &["exe", "dll"]
        }
        "application/x-msi" => &["msi"],
        "application/x-apple-diskimage" => &["dmg"],
        "application/vnd.android.package-archive" => &["apk"],
        "application/octet-stream" => &["bin"],
        _ => &[],
    }
}
