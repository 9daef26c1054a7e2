use eframe::egui::{RichText, ScrollArea, Ui};

use crate::data::dashboard::{COMPARISON_METRICS, LINE_CHART_METRICS, ModelView};
use crate::data::model::{Metric, Phase};
use crate::state::AppState;
use crate::ui::charts::{
    before_after_chart, chart_pair, comparison_chart, empty_note, multi_metric_chart,
};
use crate::ui::summary_table::summary_table;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the page: header, then either the upload prompt or the model
/// tabs followed by the cross-model comparison.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Visualisation for Fine-tuning LLMs using Entity Hallucination Index");
    ui.label(RichText::new("Research Demo | Before vs After Fine-Tuning Analysis").weak());
    ui.separator();

    if state.dashboard.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Upload the three model metric files to begin.");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            model_tabs(ui, state);
            ui.separator();
            cross_model_section(ui, &state.dashboard.models);
        });
}

fn model_tabs(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for model in &state.dashboard.models {
            let selected = state.active_tab.as_deref() == Some(model.label.as_str());
            if ui.selectable_label(selected, &model.label).clicked() {
                state.active_tab = Some(model.label.clone());
            }
        }
    });
    ui.add_space(4.0);

    let active = state
        .active_tab
        .as_deref()
        .and_then(|t| state.dashboard.model(t));
    if let Some(view) = active {
        model_analysis(ui, view);
    }
}

/// One model tab: two line charts, two multi-metric charts, averages table.
fn model_analysis(ui: &mut Ui, view: &ModelView) {
    ui.heading(format!("{} Analysis", view.label));
    ui.label(
        RichText::new(format!(
            "{} records from {} (every {} shown)",
            view.table.len(),
            view.source,
            view.sampled.stride
        ))
        .small()
        .weak(),
    );
    if view.table.is_empty() {
        empty_note(ui, "This file has no records; charts are blank.");
    }

    let [m1, m2] = LINE_CHART_METRICS;
    let line_a = before_after_chart(view, m1);
    let line_b = before_after_chart(view, m2);
    chart_pair(
        ui,
        [
            &format!("{}_{m1}_line", view.label),
            &format!("{}_{m2}_line", view.label),
        ],
        [&line_a, &line_b],
    );

    ui.add_space(8.0);

    let before = multi_metric_chart(view, Phase::Before, &Metric::DISPLAY_ORDER);
    let after = multi_metric_chart(view, Phase::After, &Metric::DISPLAY_ORDER);
    chart_pair(
        ui,
        [
            &format!("{}_multi_before", view.label),
            &format!("{}_multi_after", view.label),
        ],
        [&before, &after],
    );

    ui.add_space(8.0);
    summary_table(
        ui,
        &format!("{}_summary", view.label),
        "Average Hallucination Metrics",
        &view.summary,
    );
}

fn cross_model_section(ui: &mut Ui, models: &[ModelView]) {
    ui.heading("Cross-Model Comparison");
    let [m1, m2] = COMPARISON_METRICS;
    let a = comparison_chart(models, m1);
    let b = comparison_chart(models, m2);
    chart_pair(
        ui,
        [&format!("compare_{m1}"), &format!("compare_{m2}")],
        [&a, &b],
    );
}
