use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any failure inside plotters, including a missing font.
    #[error("failed to plot: {0}")]
    Plot(String),

    #[error("failed to write metrics: {0}")]
    Csv(#[from] csv::Error),

    #[error("metric for {thread_count} threads is not finite (zero elapsed time?)")]
    NonFiniteMetric { thread_count: u64 },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ReportError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ReportError::Plot(err.to_string())
    }
}
