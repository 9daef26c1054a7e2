use serde_json::Value as JsonValue;

use super::loader::RawRecord;
use super::model::{Metric, MetricRecord, MetricTable, Phase};

/// Convert raw records into a [`MetricTable`] of at most `limit` rows.
///
/// Only the `{metric}_{before,after}` fields are kept.  Missing and `null`
/// fields become `None`.  Non-numeric values are logged and treated as
/// missing.
pub fn normalize_records(records: &[RawRecord], limit: usize) -> MetricTable {
    let rows = records
        .iter()
        .take(limit)
        .enumerate()
        .map(|(row, raw)| normalize_record(row, raw))
        .collect();
    MetricTable::from_rows(rows)
}

fn normalize_record(row: usize, raw: &RawRecord) -> MetricRecord {
    let mut rec = MetricRecord::default();
    for metric in Metric::ALL {
        for phase in Phase::BOTH {
            let field = metric.field(phase);
            rec.set(metric, phase, numeric_field(row, &field, raw.get(&field)));
        }
    }
    rec
}

fn numeric_field(row: usize, field: &str, val: Option<&JsonValue>) -> Option<f64> {
    match val? {
        JsonValue::Null => None,
        JsonValue::Number(n) => n.as_f64(),
        other => {
            log::warn!("Record {}: {field} is not numeric ({other}), treating as missing", row + 1);
            None
        }
    }
}
