//! Report sink trait and the record types it renders
//!
//! Sinks receive two shapes of data: a keyed numeric record (one page or the
//! run aggregate) and a frequency table. Rendering never feeds back into the
//! crawl.

use crate::stats::{AggregateStatistics, PageStatistics};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A single numeric value in a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Count(u64),
    Average(f64),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Count(n) => write!(f, "{}", n),
            Metric::Average(v) => write!(f, "{:.2}", v),
        }
    }
}

/// A titled, ordered set of named numbers
#[derive(Debug, Clone, PartialEq)]
pub struct StatRecord {
    pub title: String,
    pub fields: Vec<(&'static str, Metric)>,
}

impl StatRecord {
    /// Record for a single page, titled with its URL
    pub fn for_page(page: &PageStatistics) -> Self {
        Self {
            title: page.url.clone(),
            fields: vec![
                ("Links", Metric::Count(page.url_count as u64)),
                ("Images", Metric::Count(page.image_count as u64)),
                ("Total image area (px)", Metric::Count(page.total_image_pixel_area)),
                ("Average image area (px)", Metric::Average(page.average_image_pixel_area)),
                ("Headers", Metric::Count(page.header_count as u64)),
                ("Symbols", Metric::Count(page.symbol_count as u64)),
                ("Words", Metric::Count(page.word_count as u64)),
                ("Distinct words", Metric::Count(page.word_frequency.len() as u64)),
            ],
        }
    }

    /// Record for the whole run
    pub fn for_aggregate(total: &AggregateStatistics) -> Self {
        Self {
            title: "All pages".to_string(),
            fields: vec![
                ("Pages", Metric::Count(total.page_count as u64)),
                ("Links", Metric::Count(total.url_count as u64)),
                ("Images", Metric::Count(total.image_count as u64)),
                ("Total image area (px)", Metric::Count(total.total_image_pixel_area)),
                ("Average image area (px)", Metric::Average(total.average_image_pixel_area)),
                ("Headers", Metric::Count(total.header_count as u64)),
                ("Symbols", Metric::Count(total.symbol_count as u64)),
                ("Words", Metric::Count(total.word_count as u64)),
                ("Distinct words", Metric::Count(total.word_frequency.len() as u64)),
            ],
        }
    }
}

/// Frequency table sorted by count, descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    pub title: String,
    pub entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Sorts counts descending (ties by key ascending) and keeps the top N
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use site_census::output::FrequencyTable;
    ///
    /// let counts = HashMap::from([("b", 2), ("a", 2), ("c", 5)]);
    /// let table = FrequencyTable::from_counts("Words", &counts, Some(2));
    /// assert_eq!(table.entries, vec![("c".to_string(), 5), ("a".to_string(), 2)]);
    /// ```
    pub fn from_counts<K>(title: &str, counts: &HashMap<K, usize>, top: Option<usize>) -> Self
    where
        K: Ord + fmt::Display,
    {
        let mut sorted: Vec<(&K, usize)> = counts.iter().map(|(k, v)| (k, *v)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let limit = top.unwrap_or(sorted.len());
        let entries = sorted
            .into_iter()
            .take(limit)
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        Self {
            title: title.to_string(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest count in the table, 0 when empty
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

/// Trait for report sinks
///
/// Implementations render records and frequency tables for a human to read.
pub trait ReportSink {
    /// Renders a keyed numeric record
    fn render_record(&mut self, record: &StatRecord) -> OutputResult<()>;

    /// Renders a frequency table (already sorted and truncated)
    fn render_frequencies(&mut self, table: &FrequencyTable) -> OutputResult<()>;
}
