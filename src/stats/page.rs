//! Per-page content statistics

use crate::crawler::Document;
use crate::stats::text::{tokenize, visible_fragments};
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

/// Statistics for one successfully fetched and parsed page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageStatistics {
    /// URL the page was fetched from
    pub url: String,

    /// Same-host links found on the page (duplicates included)
    pub url_count: usize,

    /// `<img>` elements carrying both width and height attributes
    pub image_count: usize,

    /// Sum of width × height over images with numeric dimensions
    pub total_image_pixel_area: u64,

    /// Mean area over images with numeric dimensions, 0 when there are none
    pub average_image_pixel_area: f64,

    /// `<h1>`..`<h6>` elements
    pub header_count: usize,

    /// Characters across all visible text fragments
    pub symbol_count: usize,

    /// Tokens across all visible text fragments
    pub word_count: usize,

    /// word → occurrences
    pub word_frequency: HashMap<String, usize>,

    /// word length (chars) → occurrences
    pub word_length_frequency: HashMap<usize, usize>,
}

/// Image counts and areas for a page
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ImageSummary {
    count: usize,
    total_area: u64,
    average_area: f64,
}

/// Computes statistics for a parsed page
///
/// `links` are the page's links as returned by link extraction; only their
/// number is recorded.
///
/// # Example
///
/// ```
/// use site_census::crawler::Document;
/// use site_census::stats::compute_statistics;
///
/// let doc = Document::parse_str(r#"<h1>Hi</h1><p>Hi, you!</p><img width="2" height="3">"#).unwrap();
/// let stats = compute_statistics("https://example.com/", &doc, &[]);
/// assert_eq!(stats.word_count, 3);
/// assert_eq!(stats.word_frequency["hi"], 2);
/// assert_eq!(stats.total_image_pixel_area, 6);
/// assert_eq!(stats.header_count, 1);
/// ```
pub fn compute_statistics(url: &str, document: &Document, links: &[Url]) -> PageStatistics {
    let fragments = visible_fragments(document);

    let symbol_count = fragments.iter().map(|f| f.chars().count()).sum();

    let mut word_frequency: HashMap<String, usize> = HashMap::new();
    let mut word_length_frequency: HashMap<usize, usize> = HashMap::new();
    let mut word_count = 0;

    for word in fragments.iter().flat_map(|fragment| tokenize(fragment)) {
        *word_length_frequency
            .entry(word.chars().count())
            .or_default() += 1;
        *word_frequency.entry(word).or_default() += 1;
        word_count += 1;
    }

    let images = summarize_images(document);

    PageStatistics {
        url: url.to_string(),
        url_count: links.len(),
        image_count: images.count,
        total_image_pixel_area: images.total_area,
        average_image_pixel_area: images.average_area,
        header_count: document.select_in_body("h1, h2, h3, h4, h5, h6").len(),
        symbol_count,
        word_count,
        word_frequency,
        word_length_frequency,
    }
}

/// Counts images with width and height, summing areas where both are numeric
fn summarize_images(document: &Document) -> ImageSummary {
    let images = document.select_in_body("img[width][height]");

    let areas: Vec<u64> = images
        .iter()
        .filter_map(|img| {
            let width = parse_dimension(img.value().attr("width")?)?;
            let height = parse_dimension(img.value().attr("height")?)?;
            Some(width.saturating_mul(height))
        })
        .collect();

    let total_area = areas.iter().fold(0u64, |acc, a| acc.saturating_add(*a));
    let average_area = if areas.is_empty() {
        0.0
    } else {
        total_area as f64 / areas.len() as f64
    };

    ImageSummary {
        count: images.len(),
        total_area,
        average_area,
    }
}

/// Parses an attribute made purely of ASCII digits
///
/// "100px", "50%", " 10" and "" are all rejected.
fn parse_dimension(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
