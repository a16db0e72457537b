//! Site-Census: a same-host crawler that measures what pages are made of
//!
//! This crate crawls a website from a seed URL up to a depth budget, keeps to
//! links on the seed's host, and computes per-page and aggregate content
//! statistics (links, images, headers, text volume, word frequencies).

pub mod config;
pub mod crawler;
pub mod output;
pub mod stats;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Census operations
///
/// Page-level failures never show up here; the crawl engine turns them into
/// skipped branches. These are the errors that stop a run before or after
/// the crawl itself.
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for Site-Census operations
pub type Result<T> = std::result::Result<T, CensusError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlEngine, CrawlReport, Fetcher, HttpFetcher};
pub use stats::{aggregate, AggregateStatistics, PageStatistics};
pub use crate::url::{resolve_link, HostFilter};
