use std::fmt;

// ---------------------------------------------------------------------------
// Metric – one of the seven fixed hallucination metrics
// ---------------------------------------------------------------------------

/// A hallucination / quality metric identifier.  The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Ehi,
    Ef1,
    Ph,
    Of,
    Nh,
    Lf,
    Ef,
}

impl Metric {
    /// All metrics in record-key order.
    pub const ALL: [Metric; 7] = [
        Metric::Ehi,
        Metric::Ef1,
        Metric::Ph,
        Metric::Of,
        Metric::Nh,
        Metric::Lf,
        Metric::Ef,
    ];

    /// Order used by the multi-metric charts and the summary table.
    pub const DISPLAY_ORDER: [Metric; 7] = [
        Metric::Ehi,
        Metric::Ef1,
        Metric::Of,
        Metric::Nh,
        Metric::Lf,
        Metric::Ef,
        Metric::Ph,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Metric::Ehi => "EHI",
            Metric::Ef1 => "EF1",
            Metric::Ph => "PH",
            Metric::Of => "OF",
            Metric::Nh => "NH",
            Metric::Lf => "LF",
            Metric::Ef => "EF",
        }
    }

    /// Position of this metric inside a [`MetricRecord`].
    fn slot(self) -> usize {
        self as usize
    }

    /// Raw record field name, e.g. `EHI_before`.
    pub fn field(self, phase: Phase) -> String {
        format!("{}_{}", self.key(), phase.suffix())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Phase – before / after fine-tuning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    pub const BOTH: [Phase; 2] = [Phase::Before, Phase::After];

    pub fn suffix(self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }

    /// Human label used in legends and titles.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Before => "Before FT",
            Phase::After => "After FT",
        }
    }
}

// ---------------------------------------------------------------------------
// MetricRecord – one normalized input record
// ---------------------------------------------------------------------------

/// Before/after values of one metric.  `None` means the field was absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricPair {
    pub before: Option<f64>,
    pub after: Option<f64>,
}

impl MetricPair {
    pub fn get(&self, phase: Phase) -> Option<f64> {
        match phase {
            Phase::Before => self.before,
            Phase::After => self.after,
        }
    }

    pub fn set(&mut self, phase: Phase, value: Option<f64>) {
        match phase {
            Phase::Before => self.before = value,
            Phase::After => self.after = value,
        }
    }
}

/// All fourteen metric/phase values of a single record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRecord {
    pairs: [MetricPair; 7],
}

impl MetricRecord {
    pub fn pair(&self, metric: Metric) -> &MetricPair {
        &self.pairs[metric.slot()]
    }

    pub fn get(&self, metric: Metric, phase: Phase) -> Option<f64> {
        self.pair(metric).get(phase)
    }

    pub fn set(&mut self, metric: Metric, phase: Phase, value: Option<f64>) {
        self.pairs[metric.slot()].set(phase, value);
    }
}

// ---------------------------------------------------------------------------
// MetricTable – ordered rows, row position = record number - 1
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTable {
    rows: Vec<MetricRecord>,
}

impl MetricTable {
    pub fn from_rows(rows: Vec<MetricRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MetricRecord] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at a row position, `None` when absent or out of range.
    pub fn value(&self, row: usize, metric: Metric, phase: Phase) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(metric, phase))
    }

    /// The full `{metric}_{phase}` column.
    pub fn column(&self, metric: Metric, phase: Phase) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.get(metric, phase)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_key_and_phase() {
        assert_eq!(Metric::Ehi.field(Phase::Before), "EHI_before");
        assert_eq!(Metric::Ef1.field(Phase::After), "EF1_after");
    }

    #[test]
    fn record_slots_are_independent() {
        let mut rec = MetricRecord::default();
        rec.set(Metric::Ph, Phase::After, Some(0.7));
        assert_eq!(rec.get(Metric::Ph, Phase::After), Some(0.7));
        assert_eq!(rec.get(Metric::Ph, Phase::Before), None);
        for m in Metric::ALL.into_iter().filter(|m| *m != Metric::Ph) {
            assert_eq!(*rec.pair(m), MetricPair::default());
        }
    }

    #[test]
    fn table_value_out_of_range_is_none() {
        let table = MetricTable::from_rows(vec![MetricRecord::default()]);
        assert_eq!(table.value(5, Metric::Ehi, Phase::Before), None);
        assert_eq!(table.column(Metric::Ehi, Phase::After), vec![None]);
    }
}
