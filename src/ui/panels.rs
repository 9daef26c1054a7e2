use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::{RECORD_LIMIT_MAX, RECORD_LIMIT_MIN, RECORD_LIMIT_STEP};
use crate::data::loader::{UploadedFile, load_batch, load_bytes};
use crate::data::resolve::resolve_model_label;
use crate::data::summary::export_summary_csv;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – upload + record limit
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Inputs");
    ui.separator();

    if ui.button("Upload 3 JSON metric files…").clicked() {
        open_files_dialog(state);
    }
    ui.label(RichText::new("or drop .json files onto the window").small().weak());
    ui.add_space(8.0);

    let mut limit = state.record_limit;
    ui.label("Number of records to visualize");
    ui.add(
        egui::Slider::new(&mut limit, RECORD_LIMIT_MIN..=RECORD_LIMIT_MAX)
            .step_by(RECORD_LIMIT_STEP as f64),
    );
    state.set_record_limit(limit);

    ui.separator();

    if state.is_empty() {
        ui.label("No files uploaded.");
        return;
    }

    ui.strong("Uploaded files");
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for file in &state.uploads {
                let label = resolve_model_label(&file.name);
                let used = state
                    .dashboard
                    .model(&label)
                    .is_some_and(|m| m.source == file.name);
                let mut text = RichText::new(format!("{}  →  {label}", file.name));
                if !used {
                    text = text.weak().strikethrough();
                }
                ui.label(text).on_hover_text(format!("{} records", file.records.len()));
            }
        });

    ui.add_space(4.0);
    if ui.button("Clear").clicked() {
        state.clear();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_files_dialog(state);
                ui.close_menu();
            }
            let can_export = !state.dashboard.is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export summary CSV…"))
                .clicked()
            {
                save_summary_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.dashboard.is_empty() {
            ui.label(format!(
                "{} model(s), {} records each at most",
                state.dashboard.models.len(),
                state.dashboard.record_limit
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs / drag-and-drop
// ---------------------------------------------------------------------------

pub fn open_files_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Upload metric files")
        .add_filter("JSON", &["json"])
        .pick_files();

    if let Some(paths) = files {
        load_paths(state, &paths);
    }
}

/// Load a batch from disk; any failure rejects the whole batch.
pub fn load_paths(state: &mut AppState, paths: &[PathBuf]) {
    match load_batch(paths) {
        Ok(files) => state.add_uploads(files),
        Err(e) => state.upload_failed(&e),
    }
}

/// Pick up files dropped onto the window this frame.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped.is_empty() {
        return;
    }

    let batch: anyhow::Result<Vec<UploadedFile>> = dropped
        .iter()
        .map(|f| match (&f.path, &f.bytes) {
            (Some(path), _) => crate::data::loader::load_file(path),
            (None, Some(bytes)) => load_bytes(&f.name, bytes),
            (None, None) => Err(anyhow::anyhow!("dropped file {} has no contents", f.name)),
        })
        .collect();

    match batch {
        Ok(files) => state.add_uploads(files),
        Err(e) => state.upload_failed(&e),
    }
}

fn save_summary_dialog(state: &mut AppState) {
    let target = rfd::FileDialog::new()
        .set_title("Export summary")
        .add_filter("CSV", &["csv"])
        .set_file_name("hallucination_summary.csv")
        .save_file();

    if let Some(path) = target {
        match export_summary_csv(&path, state.dashboard.summaries()) {
            Ok(()) => {
                log::info!("Exported summary to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export summary: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
