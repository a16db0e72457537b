//! Run-level aggregation of page statistics

use crate::stats::PageStatistics;
use serde::Serialize;
use std::collections::HashMap;

/// Statistics folded across every page of a crawl
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStatistics {
    /// Number of pages folded in
    pub page_count: usize,
    pub url_count: usize,
    pub image_count: usize,
    pub total_image_pixel_area: u64,
    /// Mean of the per-page averages (not re-weighted by image count)
    pub average_image_pixel_area: f64,
    pub header_count: usize,
    pub symbol_count: usize,
    pub word_count: usize,
    pub word_frequency: HashMap<String, usize>,
    pub word_length_frequency: HashMap<usize, usize>,
}

impl AggregateStatistics {
    /// True when no page contributed to this aggregate
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }
}

/// Folds page records into one aggregate
///
/// Counts are summed and frequency tables merged. The image average is the
/// plain mean of each page's own average, so a page with one image weighs
/// as much as a page with fifty. An empty slice gives an all-zero aggregate.
///
/// # Example
///
/// ```
/// use site_census::stats::{aggregate, PageStatistics};
///
/// let a = PageStatistics { image_count: 1, average_image_pixel_area: 100.0, ..Default::default() };
/// let b = PageStatistics { image_count: 3, average_image_pixel_area: 300.0, ..Default::default() };
///
/// let total = aggregate(&[a, b]);
/// assert_eq!(total.image_count, 4);
/// assert_eq!(total.average_image_pixel_area, 200.0);
/// assert!(aggregate(&[]).is_empty());
/// ```
pub fn aggregate(pages: &[PageStatistics]) -> AggregateStatistics {
    let mut total = AggregateStatistics {
        page_count: pages.len(),
        ..Default::default()
    };

    if pages.is_empty() {
        return total;
    }

    let mut average_sum = 0.0;

    for page in pages {
        total.url_count += page.url_count;
        total.image_count += page.image_count;
        total.total_image_pixel_area = total
            .total_image_pixel_area
            .saturating_add(page.total_image_pixel_area);
        total.header_count += page.header_count;
        total.symbol_count += page.symbol_count;
        total.word_count += page.word_count;
        average_sum += page.average_image_pixel_area;

        for (word, count) in &page.word_frequency {
            *total.word_frequency.entry(word.clone()).or_default() += count;
        }
        for (length, count) in &page.word_length_frequency {
            *total.word_length_frequency.entry(*length).or_default() += count;
        }
    }

    total.average_image_pixel_area = average_sum / pages.len() as f64;

    total
}
