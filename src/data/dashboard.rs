use super::loader::UploadedFile;
use super::model::{Metric, MetricTable};
use super::normalize::normalize_records;
use super::resolve::files_by_model;
use super::sample::SampledIndices;
use super::summary::{MetricSummary, summarize};

/// Metrics drawn on the cross-model comparison section.
pub const COMPARISON_METRICS: [Metric; 2] = [Metric::Ehi, Metric::Ef1];

/// Metrics drawn as single before/after line charts in each model tab.
pub const LINE_CHART_METRICS: [Metric; 2] = [Metric::Ehi, Metric::Ef1];

/// Everything derived for one resolved model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelView {
    pub label: String,
    /// File the table was built from.
    pub source: String,
    pub table: MetricTable,
    pub sampled: SampledIndices,
    pub summary: Vec<MetricSummary>,
}

impl ModelView {
    pub fn build(label: String, file: &UploadedFile, limit: usize) -> Self {
        let table = normalize_records(&file.records, limit);
        let sampled = SampledIndices::for_len(table.len());
        let summary = summarize(&table, &Metric::DISPLAY_ORDER);
        Self {
            label,
            source: file.name.clone(),
            table,
            sampled,
            summary,
        }
    }
}

/// The derived view of one upload batch at one record limit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dashboard {
    pub models: Vec<ModelView>,
    pub record_limit: usize,
}

impl Dashboard {
    /// Pure rebuild: same uploads and limit give an identical dashboard.
    pub fn build(files: &[UploadedFile], record_limit: usize) -> Self {
        let models: Vec<ModelView> = files_by_model(files)
            .into_iter()
            .map(|(label, file)| ModelView::build(label, file, record_limit))
            .collect();
        log::info!(
            "Built dashboard for {} model(s) at {record_limit} records",
            models.len()
        );
        Self {
            models,
            record_limit,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn model(&self, label: &str) -> Option<&ModelView> {
        self.models.iter().find(|m| m.label == label)
    }

    /// `(label, summary rows)` pairs for CSV export.
    pub fn summaries(&self) -> impl Iterator<Item = (&str, &[MetricSummary])> {
        self.models
            .iter()
            .map(|m| (m.label.as_str(), m.summary.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Phase;
    use serde_json::json;

    fn upload(name: &str, n: usize, value: f64) -> UploadedFile {
        let records = (0..n)
            .map(|_| {
                json!({ "EHI_before": value, "EHI_after": value + 0.1 })
                    .as_object()
                    .cloned()
                    .unwrap()
            })
            .collect();
        UploadedFile::new(name, records)
    }

    #[test]
    fn one_view_per_label_first_file_wins() {
        let files = vec![
            upload("mistral_run1.json", 30, 0.2),
            upload("distilbart.json", 80, 0.4),
            upload("Mistral_run2.json", 10, 0.9),
        ];
        let dash = Dashboard::build(&files, 50);
        assert_eq!(dash.models.len(), 2);

        let mistral = dash.model("Mistral").unwrap();
        assert_eq!(mistral.source, "mistral_run1.json");
        assert_eq!(mistral.table.len(), 30);
        assert_eq!(mistral.sampled.stride, 5);

        let distil = dash.model("DistilBART").unwrap();
        assert_eq!(distil.table.len(), 50);
        assert_eq!(distil.summary[0].metric, Metric::Ehi);
        assert_eq!(distil.summary[0].before, 0.4);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let files = vec![upload("flan_t5.json", 64, 0.3), upload("custom.json", 7, 0.6)];
        let a = Dashboard::build(&files, 60);
        let b = Dashboard::build(&files, 60);
        // Summaries hold NaN for absent metrics, so compare those bitwise.
        let bits = |d: &Dashboard| -> Vec<(u64, u64)> {
            d.models
                .iter()
                .flat_map(|m| m.summary.iter().map(|s| (s.before.to_bits(), s.after.to_bits())))
                .collect()
        };
        assert_eq!(a.models.len(), 2);
        for (x, y) in a.models.iter().zip(&b.models) {
            assert_eq!(x.label, y.label);
            assert_eq!(x.table, y.table);
            assert_eq!(x.sampled, y.sampled);
        }
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn limit_change_reshapes_tables() {
        let files = vec![upload("flan_t5.json", 64, 0.3)];
        let small = Dashboard::build(&files, 20);
        let view = &small.models[0];
        assert_eq!(view.table.len(), 20);
        assert_eq!(view.sampled.positions, vec![0, 3, 6, 9, 12, 15, 18]);
        assert_eq!(view.table.value(19, Metric::Ehi, Phase::After), Some(0.3 + 0.1));
    }

    #[test]
    fn no_files_is_empty() {
        assert!(Dashboard::build(&[], 50).is_empty());
    }
}
