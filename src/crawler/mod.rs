//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with content-type exclusion
//! - HTML parsing and link extraction
//! - Depth-bounded, same-host traversal

mod document;
mod engine;
mod fetcher;
mod links;

pub use document::{Document, EmptyDocument, TextNode};
pub use engine::{CrawlEngine, CrawlReport, SkipReason, SkippedPage, VisitOutcome};
pub use fetcher::{
    build_http_client, extensions_for_content_type, format_user_agent, FetchError, Fetcher,
    HttpFetcher,
};
pub use links::extract_links;

use crate::config::Config;
use crate::url::{parse_seed, HostFilter};
use crate::CensusError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Parse the seed URL and derive the host filter
/// 2. Build the HTTP client
/// 3. Walk the site and collect page statistics
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed (individual pages may have been skipped)
/// * `Err(CensusError)` - The crawl could not start
///
/// # Example
///
/// ```no_run
/// use site_census::config::load_config;
/// use site_census::crawler::crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("census.toml"))?;
/// let report = crawl(&config).await?;
/// println!("{} pages", report.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config) -> Result<CrawlReport, CensusError> {
    let seed = parse_seed(&config.crawler.seed_url)?;
    let host_filter = HostFilter::from_seed(&seed)?;
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;

    let engine = CrawlEngine::new(fetcher, host_filter);
    Ok(engine.crawl(&seed, config.crawler.max_depth).await)
}
