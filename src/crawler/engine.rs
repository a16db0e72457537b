//! Crawl engine - depth-bounded, same-host traversal
//!
//! The engine owns everything a run mutates: the visited set, the visit
//! order, collected page statistics and skipped pages. One engine serves
//! exactly one crawl; `crawl` consumes it.

use crate::crawler::document::Document;
use crate::crawler::fetcher::{FetchError, Fetcher};
use crate::crawler::links::extract_links;
use crate::stats::{aggregate, compute_statistics, AggregateStatistics, PageStatistics};
use crate::url::HostFilter;
use serde::Serialize;
use std::collections::HashSet;
use url::Url;

/// Why a visited URL produced no statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Fetch failed or the content type is excluded
    Fetch(String),
    /// The body parsed to nothing usable
    EmptyDocument,
}

impl From<FetchError> for SkipReason {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e.to_string())
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "fetch failed: {}", e),
            Self::EmptyDocument => f.write_str("empty document"),
        }
    }
}

/// Result of one visit attempt
#[derive(Debug)]
pub enum VisitOutcome {
    Page {
        stats: PageStatistics,
        /// Same-host links in document order, used for scheduling
        links: Vec<Url>,
    },
    Skipped(SkipReason),
}

/// A visited URL that yielded no statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedPage {
    pub url: String,
    pub reason: SkipReason,
}

/// Everything a crawl run produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    pub seed_url: String,
    pub max_depth: u32,
    pub host_filter: String,
    /// Every URL the engine marked visited, in processing order
    pub visited: Vec<String>,
    /// Statistics for pages that fetched and parsed, in processing order
    pub pages: Vec<PageStatistics>,
    pub skipped: Vec<SkippedPage>,
}

impl CrawlReport {
    /// Folds all page statistics into run totals
    pub fn aggregate(&self) -> AggregateStatistics {
        aggregate(&self.pages)
    }
}

/// Depth-first crawler over a `Fetcher`
pub struct CrawlEngine<F> {
    fetcher: F,
    host_filter: HostFilter,
    visited: HashSet<String>,
    visit_order: Vec<String>,
    pages: Vec<PageStatistics>,
    skipped: Vec<SkippedPage>,
}

impl<F: Fetcher> CrawlEngine<F> {
    /// Creates an engine for a single run
    pub fn new(fetcher: F, host_filter: HostFilter) -> Self {
        Self {
            fetcher,
            host_filter,
            visited: HashSet::new(),
            visit_order: Vec::new(),
            pages: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Crawls from `seed`, following same-host links up to `max_depth` hops
    ///
    /// # Traversal
    ///
    /// Pre-order depth-first, children in document order. The frontier is an
    /// explicit stack of `(url, remaining_depth)`; children are pushed in
    /// reverse so pops replay the order a recursive walk would take. The
    /// visited check happens when an entry is popped, so a link seen twice
    /// is processed at most once.
    ///
    /// A page that fails to fetch or parse is recorded as skipped and its
    /// subtree is abandoned. Nothing is retried and the crawl never aborts.
    ///
    /// `max_depth = 0` processes the seed only.
    pub async fn crawl(mut self, seed: &Url, max_depth: u32) -> CrawlReport {
        tracing::info!(
            "Starting crawl of {} (max depth {}, host filter '{}')",
            seed,
            max_depth,
            self.host_filter
        );
        let start_time = std::time::Instant::now();

        let mut frontier: Vec<(Url, u32)> = vec![(seed.clone(), max_depth)];

        while let Some((url, remaining_depth)) = frontier.pop() {
            if !self.visited.insert(url.to_string()) {
                tracing::trace!("Already visited: {}", url);
                continue;
            }
            self.visit_order.push(url.to_string());

            tracing::debug!("Visiting [depth budget {}]: {}", remaining_depth, url);

            match self.visit(&url).await {
                VisitOutcome::Page { stats, links } => {
                    tracing::debug!(
                        "Processed {}: {} links, {} words, {} images",
                        url,
                        stats.url_count,
                        stats.word_count,
                        stats.image_count
                    );
                    self.pages.push(stats);

                    if remaining_depth > 0 {
                        let children = links
                            .into_iter()
                            .rev()
                            .filter(|link| !self.visited.contains(link.as_str()))
                            .map(|link| (link, remaining_depth - 1));
                        frontier.extend(children);
                    }

                    if self.pages.len() % 10 == 0 {
                        tracing::info!(
                            "Progress: {} pages processed, {} in frontier",
                            self.pages.len(),
                            frontier.len()
                        );
                    }
                }
                VisitOutcome::Skipped(reason) => {
                    tracing::warn!("Skipping {}: {}", url, reason);
                    self.skipped.push(SkippedPage {
                        url: url.into(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} pages processed, {} skipped in {:?}",
            self.pages.len(),
            self.skipped.len(),
            start_time.elapsed()
        );

        CrawlReport {
            seed_url: seed.to_string(),
            max_depth,
            host_filter: self.host_filter.to_string(),
            visited: self.visit_order,
            pages: self.pages,
            skipped: self.skipped,
        }
    }

    /// Fetches, parses and measures one page
    async fn visit(&self, url: &Url) -> VisitOutcome {
        let body = match self.fetcher.fetch(url.as_str()).await {
            Ok(body) => body,
            Err(e) => return VisitOutcome::Skipped(e.into()),
        };

        let document = match Document::parse(&body) {
            Ok(doc) => doc,
            Err(_) => return VisitOutcome::Skipped(SkipReason::EmptyDocument),
        };

        let links = extract_links(&document, url, &self.host_filter);
        let stats = compute_statistics(url.as_str(), &document, &links);

        VisitOutcome::Page { stats, links }
    }
}
