//! Error types for the gallery

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Unknown chart: {0} (run with --list to see the gallery)")]
    UnknownChart(String),

    /// Full error-stack report of the failing chart, rendered with `{:?}`
    #[error("Chart {name} failed: {report}")]
    Chart { name: String, report: String },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
