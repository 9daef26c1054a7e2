use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::summary::{MetricSummary, format_mean};

/// Two-column (before / after) averages table for one model.
pub fn summary_table(ui: &mut Ui, id: &str, title: &str, rows: &[MetricSummary]) {
    ui.heading(title);
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for name in ["Metric", "Before FT", "After FT"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(18.0, |mut tr| {
                        tr.col(|ui: &mut Ui| {
                            ui.label(row.metric.key());
                        });
                        tr.col(|ui: &mut Ui| {
                            ui.label(RichText::new(format_mean(row.before)).monospace());
                        });
                        tr.col(|ui: &mut Ui| {
                            ui.label(RichText::new(format_mean(row.after)).monospace());
                        });
                    });
                }
            });
    });
}
