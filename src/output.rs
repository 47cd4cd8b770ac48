//! Presentation of forecast summaries.
//!
//! Supports a tab-separated terminal table, pretty JSON and a debug dump.
//! Both printers sort by day first; the aggregator does not.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::summary::{ForecastSummary, weekday_name};

/// Logs the summary using Rust's debug pretty-print format.
pub fn log_summary(summary: &ForecastSummary) {
    debug!("{:#?}", summary);
}

/// Writes a `Forecast for <zip>` heading followed by one line per day:
/// `<Weekday>\t\t<low>\t<high>\t<short forecast>`, oldest first.
pub fn write_table<W: Write>(out: &mut W, zip: &str, summary: &ForecastSummary) -> Result<()> {
    let mut summary = summary.clone();
    summary.sort_by_day();

    writeln!(out, "\nForecast for {}", zip.trim())?;

    for day in &summary.days {
        writeln!(
            out,
            "{}\t\t{}\t{}\t{}",
            weekday_name(day.weekday),
            day.low,
            day.high,
            day.short_forecast
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Writes the summary as pretty-printed JSON, sorted by day.
pub fn write_json<W: Write>(out: &mut W, summary: &ForecastSummary) -> Result<()> {
    let mut summary = summary.clone();
    summary.sort_by_day();

    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(())
}
