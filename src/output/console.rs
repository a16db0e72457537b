//! Plain-text sink: aligned tables and horizontal bar charts

use crate::output::traits::{FrequencyTable, OutputResult, ReportSink, StatRecord};
use std::io::Write;

/// Widest bar drawn for the largest count
const BAR_WIDTH: usize = 40;

/// Writes reports as text to any writer (stdout in the CLI)
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn render_record(&mut self, record: &StatRecord) -> OutputResult<()> {
        writeln!(self.out, "=== {} ===", record.title)?;

        let label_width = record
            .fields
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);

        for (label, value) in &record.fields {
            writeln!(self.out, "  {:<width$}  {:>12}", label, value, width = label_width)?;
        }
        writeln!(self.out)?;

        Ok(())
    }

    fn render_frequencies(&mut self, table: &FrequencyTable) -> OutputResult<()> {
        writeln!(self.out, "=== {} ===", table.title)?;

        if table.is_empty() {
            writeln!(self.out, "  (no data)")?;
            writeln!(self.out)?;
            return Ok(());
        }

        let key_width = table
            .entries
            .iter()
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0);
        let max = table.max_count();

        for (key, count) in &table.entries {
            let padding = key_width - key.chars().count();
            writeln!(
                self.out,
                "  {}{}  {} {}",
                key,
                " ".repeat(padding),
                "#".repeat(bar_length(*count, max)),
                count
            )?;
        }
        writeln!(self.out)?;

        Ok(())
    }
}

/// Scales a count to the bar width; any non-zero count gets at least one mark
fn bar_length(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    ((count * BAR_WIDTH) / max).max(1)
}
