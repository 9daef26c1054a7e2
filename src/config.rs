use std::path::PathBuf;

use clap::Parser;

// ---------------------------------------------------------------------------
// Record limit control
// ---------------------------------------------------------------------------

pub const RECORD_LIMIT_MIN: usize = 10;
pub const RECORD_LIMIT_MAX: usize = 100;
pub const RECORD_LIMIT_STEP: usize = 10;
pub const RECORD_LIMIT_DEFAULT: usize = 50;

/// Snap an arbitrary value onto the slider grid `[10, 100]` step 10.
pub fn snap_record_limit(n: usize) -> usize {
    let clamped = n.clamp(RECORD_LIMIT_MIN, RECORD_LIMIT_MAX);
    let steps = (clamped - RECORD_LIMIT_MIN + RECORD_LIMIT_STEP / 2) / RECORD_LIMIT_STEP;
    RECORD_LIMIT_MIN + steps * RECORD_LIMIT_STEP
}

// ---------------------------------------------------------------------------
// Chart appearance
// ---------------------------------------------------------------------------

/// Fixed canvas: 4.8 × 2.2 in at 120 dpi.
pub const CHART_WIDTH: f32 = 576.0;
pub const CHART_HEIGHT: f32 = 264.0;

pub const TITLE_FONT_SIZE: f32 = 10.0;
pub const TICK_FONT_SIZE: f32 = 8.0;
pub const LEGEND_FONT_SIZE: f32 = 7.0;

pub const LINE_WIDTH: f32 = 1.2;
pub const EMPHASIS_LINE_WIDTH: f32 = 1.4;

/// Upper y bound of the before/after and comparison charts.
pub const LINE_Y_MAX: f64 = 1.2;
/// Upper y bound (and clamp) of the multi-metric charts.
pub const MULTI_Y_MAX: f64 = 1.0;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Before/after fine-tuning hallucination metric dashboard.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// JSON metric files to load at startup
    pub files: Vec<PathBuf>,

    /// Number of records to visualize (10-100, step 10)
    #[arg(short, long, default_value_t = RECORD_LIMIT_DEFAULT, env = "EHI_RECORDS")]
    pub records: usize,
}

impl Cli {
    pub fn record_limit(&self) -> usize {
        snap_record_limit(self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapping_stays_on_grid() {
        assert_eq!(snap_record_limit(0), 10);
        assert_eq!(snap_record_limit(10), 10);
        assert_eq!(snap_record_limit(14), 10);
        assert_eq!(snap_record_limit(15), 20);
        assert_eq!(snap_record_limit(50), 50);
        assert_eq!(snap_record_limit(1000), 100);
    }

    #[test]
    fn cli_defaults_and_files() {
        let cli = Cli::try_parse_from(["ehi-dashboard", "a.json", "b.json"]).unwrap();
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.record_limit(), RECORD_LIMIT_DEFAULT);

        let cli = Cli::try_parse_from(["ehi-dashboard", "--records", "73"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(cli.record_limit(), 70);
    }
}
