use std::collections::BTreeMap;

use eframe::egui::{self, Color32, Id, RichText, TextStyle, Ui};
use egui_plot::{GridInput, GridMark, Line, LineStyle, Plot, PlotBounds, PlotPoints};

use crate::color::{AFTER_COLOR, BEFORE_COLOR, metric_color, model_colors};
use crate::config::{
    CHART_HEIGHT, CHART_WIDTH, EMPHASIS_LINE_WIDTH, LINE_WIDTH, LINE_Y_MAX, MULTI_Y_MAX,
    TICK_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::data::dashboard::ModelView;
use crate::data::model::{Metric, Phase};
use crate::data::sample::union_positions;
use crate::ui::legend::{LegendEntry, legend};

// ---------------------------------------------------------------------------
// Chart description (independent of rendering)
// ---------------------------------------------------------------------------

/// One plotted series.  `points` holds `(row, value)`; a `None` value
/// breaks the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
    pub points: Vec<(f64, Option<f64>)>,
}

impl Series {
    /// Contiguous runs of present values, each drawn as its own line.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut out = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for &(x, y) in &self.points {
            match y {
                Some(y) => current.push([x, y]),
                None if !current.is_empty() => out.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
        out
    }

    fn legend_entry(&self) -> LegendEntry {
        LegendEntry {
            label: self.name.clone(),
            color: self.color,
            dashed: self.dashed,
        }
    }
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_max: f64,
    /// Row positions that receive an x tick, labeled `position + 1`.
    pub ticks: Vec<usize>,
    pub series: Vec<Series>,
    pub legend_columns: usize,
}

impl ChartData {
    pub fn tick_labels(&self) -> Vec<String> {
        self.ticks.iter().map(|p| (p + 1).to_string()).collect()
    }
}

fn sampled_series(
    view: &ModelView,
    metric: Metric,
    phase: Phase,
    map: impl Fn(f64) -> f64,
) -> Vec<(f64, Option<f64>)> {
    view.sampled
        .positions
        .iter()
        .map(|&row| (row as f64, view.table.value(row, metric, phase).map(&map)))
        .collect()
}

// ---------------------------------------------------------------------------
// The three chart shapes
// ---------------------------------------------------------------------------

/// Before vs after of a single metric for one model.
pub fn before_after_chart(view: &ModelView, metric: Metric) -> ChartData {
    let series = [(Phase::Before, BEFORE_COLOR), (Phase::After, AFTER_COLOR)]
        .into_iter()
        .map(|(phase, color)| Series {
            name: phase.label().to_string(),
            color,
            width: LINE_WIDTH,
            dashed: false,
            points: sampled_series(view, metric, phase, |v| v),
        })
        .collect();

    ChartData {
        title: format!("{} — {metric}", view.label),
        x_label: "Record Number".to_string(),
        y_label: metric.to_string(),
        y_max: LINE_Y_MAX,
        ticks: view.sampled.positions.clone(),
        series,
        legend_columns: 2,
    }
}

/// Every metric of one phase for one model.  Values above 1.0 are drawn at
/// 1.0; the table data itself is untouched.
pub fn multi_metric_chart(view: &ModelView, phase: Phase, metrics: &[Metric]) -> ChartData {
    let series = metrics
        .iter()
        .map(|&metric| Series {
            name: metric.to_string(),
            color: metric_color(metric),
            width: LINE_WIDTH,
            dashed: false,
            points: sampled_series(view, metric, phase, |v| v.min(MULTI_Y_MAX)),
        })
        .collect();

    ChartData {
        title: format!(
            "{} — All Hallucination Metrics ({})",
            view.label,
            phase.label()
        ),
        x_label: "Record Number".to_string(),
        y_label: "Metric Value".to_string(),
        y_max: MULTI_Y_MAX,
        ticks: view.sampled.positions.clone(),
        series,
        legend_columns: 4,
    }
}

/// One metric across all models: dashed "before", solid "after".
///
/// Each model is sampled with its own stride.  The x ticks are the union
/// of every model's positions, so they stay aligned when row counts differ.
pub fn comparison_chart(models: &[ModelView], metric: Metric) -> ChartData {
    let colors = model_colors(models.len());
    let mut series = Vec::with_capacity(models.len() * 2);
    for (view, (before_color, after_color)) in models.iter().zip(colors) {
        series.push(Series {
            name: format!("{} (Before)", view.label),
            color: before_color,
            width: LINE_WIDTH,
            dashed: true,
            points: sampled_series(view, metric, Phase::Before, |v| v),
        });
        series.push(Series {
            name: format!("{} (After)", view.label),
            color: after_color,
            width: EMPHASIS_LINE_WIDTH,
            dashed: false,
            points: sampled_series(view, metric, Phase::After, |v| v),
        });
    }

    let ticks = union_positions(models.iter().map(|m| &m.sampled));

    ChartData {
        title: format!("Model Comparison — {metric} (Before vs After FT)"),
        x_label: "Record Number".to_string(),
        y_label: metric.to_string(),
        y_max: LINE_Y_MAX,
        ticks,
        series,
        legend_columns: 3,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Stable plot id for a chart key, so plot memory can be looked up.
pub fn plot_id(id: &str) -> Id {
    Id::new(("ehi_plot", id))
}

/// Fixed view of a chart: x spans the ticks (half a row of padding each
/// side), y spans `[0, y_max]`.
pub fn chart_bounds(chart: &ChartData) -> PlotBounds {
    let (x_min, x_max) = match (chart.ticks.first(), chart.ticks.last()) {
        (Some(&first), Some(&last)) => (first as f64 - 0.5, last as f64 + 0.5),
        _ => (0.0, 1.0),
    };
    PlotBounds::from_min_max([x_min, 0.0], [x_max, chart.y_max])
}

/// Grid marks for the x ticks.
///
/// egui_plot hides a tick label unless `step_size` maps to more than the
/// axis label spacing, so every mark carries the full x span.  Only the
/// label fade depends on it; the grid itself is not drawn.
pub fn tick_marks(chart: &ChartData) -> Vec<GridMark> {
    let bounds = chart_bounds(chart);
    let span = bounds.max()[0] - bounds.min()[0];
    chart
        .ticks
        .iter()
        .map(|&p| GridMark {
            value: p as f64,
            step_size: span,
        })
        .collect()
}

/// Draw a chart: title, fixed-size plot, legend underneath.
pub fn show_chart(ui: &mut Ui, id: &str, chart: &ChartData) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(&chart.title).size(TITLE_FONT_SIZE).strong());

        let bounds = chart_bounds(chart);
        let marks = tick_marks(chart);
        let labels: BTreeMap<usize, String> =
            chart.ticks.iter().copied().zip(chart.tick_labels()).collect();

        ui.scope(|ui: &mut Ui| {
            // Axis tick labels are laid out with the Body style.
            if let Some(font) = ui.style_mut().text_styles.get_mut(&TextStyle::Body) {
                font.size = TICK_FONT_SIZE;
            }

            Plot::new(id)
                .id(plot_id(id))
                .width(CHART_WIDTH)
                .height(CHART_HEIGHT)
                .show_background(false)
                .show_grid(false)
                .x_axis_label(chart.x_label.as_str())
                .y_axis_label(chart.y_label.as_str())
                .auto_bounds(false)
                .x_grid_spacer(move |_input: GridInput| marks.clone())
                .x_axis_formatter(move |mark, _range| {
                    labels
                        .get(&(mark.value.round() as usize))
                        .cloned()
                        .unwrap_or_default()
                })
                .allow_boxed_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_zoom(false)
                .allow_double_click_reset(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(bounds);
                    for s in &chart.series {
                        for segment in s.segments() {
                            let mut line = Line::new(PlotPoints::from(segment))
                                .name(&s.name)
                                .color(s.color)
                                .width(s.width);
                            if s.dashed {
                                line = line.style(LineStyle::dashed_dense());
                            }
                            plot_ui.line(line);
                        }
                    }
                });
        });

        let entries: Vec<LegendEntry> = chart.series.iter().map(Series::legend_entry).collect();
        legend(ui, &format!("{id}_legend"), &entries, chart.legend_columns);
    });
}

/// Render two charts next to each other.
pub fn chart_pair(ui: &mut Ui, ids: [&str; 2], charts: [&ChartData; 2]) {
    ui.columns(2, |cols: &mut [Ui]| {
        for ((col, id), chart) in cols.iter_mut().zip(ids).zip(charts) {
            show_chart(col, id, chart);
        }
    });
}

/// Placeholder for sections that have no data.
pub fn empty_note(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).italics().color(egui::Color32::GRAY));
}
