//! Markdown summary generation
//!
//! This module generates human-readable markdown summaries of crawl results:
//! run metadata, aggregate statistics, frequency tables, per-page records
//! and skipped pages.

use crate::config::OutputConfig;
use crate::crawler::CrawlReport;
use crate::output::render_report;
use crate::output::traits::{FrequencyTable, OutputResult, ReportSink, StatRecord};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// When and with what a run was made
#[derive(Debug, Clone)]
pub struct RunMetadata {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub config_hash: String,
}

impl RunMetadata {
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Sink that accumulates markdown tables into a string
#[derive(Debug, Default)]
pub struct MarkdownSink {
    md: String,
}

impl MarkdownSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.md
    }
}

impl ReportSink for MarkdownSink {
    fn render_record(&mut self, record: &StatRecord) -> OutputResult<()> {
        self.md.push_str(&format!("### {}\n\n", record.title));
        self.md.push_str("| Metric | Value |\n");
        self.md.push_str("|--------|-------|\n");
        for (label, value) in &record.fields {
            self.md.push_str(&format!("| {} | {} |\n", label, value));
        }
        self.md.push('\n');
        Ok(())
    }

    fn render_frequencies(&mut self, table: &FrequencyTable) -> OutputResult<()> {
        self.md.push_str(&format!("### {}\n\n", table.title));
        if table.is_empty() {
            self.md.push_str("_No data._\n\n");
            return Ok(());
        }
        self.md.push_str("| Key | Count |\n");
        self.md.push_str("|-----|-------|\n");
        for (key, count) in &table.entries {
            self.md.push_str(&format!("| {} | {} |\n", key, count));
        }
        self.md.push('\n');
        Ok(())
    }
}

/// Generates a markdown summary of a crawl and writes it to `output_path`
pub fn generate_markdown_summary(
    report: &CrawlReport,
    meta: &RunMetadata,
    options: &OutputConfig,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_summary(report, meta, options)?;

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(
    report: &CrawlReport,
    meta: &RunMetadata,
    options: &OutputConfig,
) -> OutputResult<String> {
    let mut md = String::new();

    md.push_str("# Site-Census Crawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed URL**: {}\n", report.seed_url));
    md.push_str(&format!("- **Host Filter**: {}\n", report.host_filter));
    md.push_str(&format!("- **Max Depth**: {}\n", report.max_depth));
    md.push_str(&format!("- **Started**: {}\n", meta.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", meta.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        meta.duration_seconds()
    ));
    md.push_str(&format!("- **Config Hash**: {}\n", meta.config_hash));
    md.push_str(&format!("- **URLs Visited**: {}\n", report.visited.len()));
    md.push_str(&format!("- **Pages Measured**: {}\n", report.pages.len()));
    md.push_str(&format!("- **Pages Skipped**: {}\n\n", report.skipped.len()));

    md.push_str("## Statistics\n\n");
    let mut sink = MarkdownSink::new();
    render_report(&mut sink, report, options)?;
    md.push_str(&sink.into_string());

    if !report.skipped.is_empty() {
        md.push_str("## Skipped Pages\n\n");
        md.push_str("| URL | Reason |\n");
        md.push_str("|-----|--------|\n");
        for skipped in &report.skipped {
            md.push_str(&format!("| {} | {} |\n", skipped.url, skipped.reason));
        }
        md.push('\n');
    }

    Ok(md)
}
