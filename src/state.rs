use crate::config::{RECORD_LIMIT_DEFAULT, snap_record_limit};
use crate::data::dashboard::Dashboard;
use crate::data::loader::UploadedFile;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The session: uploaded files and the record limit are the inputs, the
/// dashboard is derived from them and rebuilt whenever either changes.
pub struct AppState {
    /// Every uploaded file, in upload order.
    pub uploads: Vec<UploadedFile>,

    /// "Records to visualize" slider value.
    pub record_limit: usize,

    /// Derived view (empty until something is uploaded).
    pub dashboard: Dashboard,

    /// Label of the selected model tab.
    pub active_tab: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RECORD_LIMIT_DEFAULT)
    }
}

impl AppState {
    pub fn new(record_limit: usize) -> Self {
        Self {
            uploads: Vec::new(),
            record_limit: snap_record_limit(record_limit),
            dashboard: Dashboard::default(),
            active_tab: None,
            status_message: None,
        }
    }

    /// Empty state: nothing uploaded yet.
    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty()
    }

    /// Append a successfully loaded batch and rebuild.
    pub fn add_uploads(&mut self, files: Vec<UploadedFile>) {
        if files.is_empty() {
            return;
        }
        self.uploads.extend(files);
        self.status_message = None;
        self.rebuild();
    }

    /// Report a failed upload.  Previously loaded files stay in place.
    pub fn upload_failed(&mut self, err: &anyhow::Error) {
        log::error!("Failed to load files: {err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
    }

    /// Change the record limit and rebuild when it actually changed.
    pub fn set_record_limit(&mut self, limit: usize) {
        let limit = snap_record_limit(limit);
        if limit != self.record_limit {
            self.record_limit = limit;
            self.rebuild();
        }
    }

    /// Drop every upload and go back to the empty state.
    pub fn clear(&mut self) {
        self.uploads.clear();
        self.dashboard = Dashboard::default();
        self.active_tab = None;
        self.status_message = None;
    }

    /// Recompute the dashboard from the current inputs.
    pub fn rebuild(&mut self) {
        self.dashboard = Dashboard::build(&self.uploads, self.record_limit);

        let tab_still_exists = self
            .active_tab
            .as_deref()
            .is_some_and(|t| self.dashboard.model(t).is_some());
        if !tab_still_exists {
            self.active_tab = self.dashboard.models.first().map(|m| m.label.clone());
        }
    }
}
