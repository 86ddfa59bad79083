// File: crates/feature-chart/src/error.rs
// Summary: Error types for rendering and for loading inputs.

use std::path::PathBuf;

use chart_core::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no element with id '{0}' on the page")]
    ElementNotFound(String),

    #[error("chart data is misaligned: {timestamps} timestamps vs {values} values")]
    LengthMismatch { timestamps: usize, values: usize },

    #[error(transparent)]
    Chart(#[from] ChartError),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to access {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("metrics table has no '{0}' column")]
    MissingColumn(String),

    #[error("unknown feature '{feature}'; available: {}", .available.join(", "))]
    UnknownFeature { feature: String, available: Vec<String> },
}

impl InputError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
