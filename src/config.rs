use std::path::{Path, PathBuf};

pub const FONT: &str = "sans-serif";
pub const PLOT_WIDTH: u32 = 1200;
pub const PLOT_HEIGHT: u32 = 500;

pub const OUTPUT_DIR: &str = "results";
pub const PLOT_FILE: &str = "performance_plots.png";
pub const CSV_FILE: &str = "performance_metrics.csv";

/// Where and how the report is written.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub plot_file: String,
    pub csv_file: String,
    pub width: u32,
    pub height: u32,
    pub font: &'static str,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            plot_file: PLOT_FILE.to_string(),
            csv_file: CSV_FILE.to_string(),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            font: FONT,
        }
    }
}

impl ReportConfig {
    pub fn with_output_dir(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn plot_path(&self) -> PathBuf {
        self.output_dir.join(&self.plot_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }
}
