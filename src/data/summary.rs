use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::{Metric, MetricTable, Phase};

// ---------------------------------------------------------------------------
// Per-metric averages
// ---------------------------------------------------------------------------

/// One row of the "Average Hallucination Metrics" table.
/// Means are rounded to 4 decimals; NaN when every value is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub metric: Metric,
    pub before: f64,
    pub after: f64,
}

/// Summarize `table` for each metric in `metrics`, in that order.
pub fn summarize(table: &MetricTable, metrics: &[Metric]) -> Vec<MetricSummary> {
    metrics
        .iter()
        .map(|&metric| MetricSummary {
            metric,
            before: round4(mean(&table.column(metric, Phase::Before))),
            after: round4(mean(&table.column(metric, Phase::After))),
        })
        .collect()
}

/// Mean over present values.
pub fn mean(values: &[Option<f64>]) -> f64 {
    let (sum, count) = values
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Display form of a table cell.
pub fn format_mean(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.4}")
    }
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Model")]
    model: &'a str,
    #[serde(rename = "Metric")]
    metric: &'a str,
    #[serde(rename = "Before FT")]
    before: String,
    #[serde(rename = "After FT")]
    after: String,
}

/// Write every model's summary rows as CSV.
pub fn write_summary_csv<'a, W: std::io::Write>(
    out: W,
    models: impl IntoIterator<Item = (&'a str, &'a [MetricSummary])>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for (model, rows) in models {
        for row in rows {
            writer
                .serialize(SummaryRow {
                    model,
                    metric: row.metric.key(),
                    before: format_mean(row.before),
                    after: format_mean(row.after),
                })
                .context("writing summary row")?;
        }
    }
    writer.flush().context("flushing summary CSV")?;
    Ok(())
}

pub fn export_summary_csv<'a>(
    path: &Path,
    models: impl IntoIterator<Item = (&'a str, &'a [MetricSummary])>,
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_summary_csv(file, models)
}
