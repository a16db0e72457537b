//! Output module for presenting crawl results
//!
//! This module handles:
//! - Rendering per-page and aggregate statistics to a report sink
//! - Generating markdown summaries of a run
//! - Exporting the report as JSON

mod console;
mod markdown;
mod traits;

pub use console::ConsoleSink;
pub use markdown::{
    format_markdown_summary, generate_markdown_summary, MarkdownSink, RunMetadata,
};
pub use traits::{FrequencyTable, Metric, OutputError, OutputResult, ReportSink, StatRecord};

use crate::config::OutputConfig;
use crate::crawler::{CrawlReport, SkippedPage};
use crate::stats::{AggregateStatistics, PageStatistics};
use serde::Serialize;

/// Renders a crawl report to a sink
///
/// Per-page records come first (when enabled), then the aggregate record,
/// then the aggregate word and word-length frequency tables. An empty run
/// renders no aggregate tables, only a note record.
///
/// # Arguments
///
/// * `sink` - Destination for the rendered records
/// * `report` - The finished crawl
/// * `options` - Output options (per-page toggle, top-word limit)
pub fn render_report<S: ReportSink + ?Sized>(
    sink: &mut S,
    report: &CrawlReport,
    options: &OutputConfig,
) -> OutputResult<()> {
    if options.per_page {
        for page in &report.pages {
            sink.render_record(&StatRecord::for_page(page))?;
        }
    }

    let total = report.aggregate();
    if total.is_empty() {
        tracing::warn!("No pages were measured; aggregate statistics are empty");
        sink.render_record(&StatRecord {
            title: "All pages".to_string(),
            fields: vec![("Pages", Metric::Count(0))],
        })?;
        return Ok(());
    }

    sink.render_record(&StatRecord::for_aggregate(&total))?;
    sink.render_frequencies(&FrequencyTable::from_counts(
        &format!("Top {} words", options.top_words),
        &total.word_frequency,
        Some(options.top_words),
    ))?;
    sink.render_frequencies(&FrequencyTable::from_counts(
        "Word length frequency",
        &total.word_length_frequency,
        None,
    ))?;

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    seed_url: &'a str,
    max_depth: u32,
    host_filter: &'a str,
    visited: &'a [String],
    pages: &'a [PageStatistics],
    skipped: &'a [SkippedPage],
    aggregate: Option<AggregateStatistics>,
}

/// Serializes a crawl report, including its aggregate, as pretty JSON
///
/// The aggregate is `null` when no page was measured.
pub fn to_json(report: &CrawlReport) -> OutputResult<String> {
    let total = report.aggregate();
    let json = JsonReport {
        seed_url: &report.seed_url,
        max_depth: report.max_depth,
        host_filter: &report.host_filter,
        visited: &report.visited,
        pages: &report.pages,
        skipped: &report.skipped,
        aggregate: (!total.is_empty()).then_some(total),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
