use eframe::egui::{self, Color32, RichText, Sense, Shape, Stroke, Ui, vec2};

use crate::config::LEGEND_FONT_SIZE;

// ---------------------------------------------------------------------------
// Legend below a plot: borderless grid, centered, fixed column count
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color32,
    pub dashed: bool,
}

/// Split `entries` into rows of `columns` entries, row-major.
pub fn legend_rows(entries: &[LegendEntry], columns: usize) -> Vec<&[LegendEntry]> {
    entries.chunks(columns.max(1)).collect()
}

pub fn legend(ui: &mut Ui, id: &str, entries: &[LegendEntry], columns: usize) {
    if entries.is_empty() {
        return;
    }
    ui.vertical_centered(|ui: &mut Ui| {
        egui::Grid::new(id)
            .num_columns(columns)
            .spacing(vec2(12.0, 2.0))
            .show(ui, |ui: &mut Ui| {
                for row in legend_rows(entries, columns) {
                    for entry in row {
                        ui.horizontal(|ui: &mut Ui| {
                            swatch(ui, entry);
                            ui.label(RichText::new(&entry.label).size(LEGEND_FONT_SIZE));
                        });
                    }
                    ui.end_row();
                }
            });
    });
}

fn swatch(ui: &mut Ui, entry: &LegendEntry) {
    let (rect, _) = ui.allocate_exact_size(vec2(18.0, LEGEND_FONT_SIZE), Sense::hover());
    let stroke = Stroke::new(1.5, entry.color);
    let points = [rect.left_center(), rect.right_center()];
    if entry.dashed {
        ui.painter()
            .extend(Shape::dashed_line(&points, stroke, 3.0, 2.0));
    } else {
        ui.painter().line_segment(points, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<LegendEntry> {
        (0..n)
            .map(|i| LegendEntry {
                label: format!("m{i}"),
                color: Color32::BLACK,
                dashed: false,
            })
            .collect()
    }

    #[test]
    fn rows_are_filled_left_to_right() {
        let e = entries(7);
        let rows = legend_rows(&e, 4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[1][0].label, "m4");
    }

    #[test]
    fn zero_columns_does_not_panic() {
        assert_eq!(legend_rows(&entries(3), 0).len(), 3);
    }
}
