//! Sequential chart driver

use std::path::PathBuf;

use chartbook::prelude::*;
use tracing::info;

use crate::charts::ChartEntry;
use crate::error::{GalleryError, Result};

/// Build and show each chart in order. Each chart is written (and handed to
/// the browser) before the next one is built; the first failure stops the run.
pub fn run_charts(entries: &[&ChartEntry], opts: &ShowOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        info!(chart = entry.name, "[{}/{}] showing", i + 1, entries.len());
        let dashboard = (entry.build)();
        let path =
            show_dashboard(&dashboard, entry.name, opts).map_err(|report| GalleryError::Chart {
                name: entry.name.to_string(),
                report: format!("{report:?}"),
            })?;
        written.push(path);
    }
    Ok(written)
}

/// Show all selected charts on one page, one tab per chart
pub fn run_dashboard(entries: &[&ChartEntry], opts: &ShowOptions) -> Result<PathBuf> {
    let mut builder = dash().title("Chartbook Gallery");
    for entry in entries {
        let plots = (entry.build)().plots;
        builder = builder.add_tab(entry.name, |t| t.columns(1).add_plots(plots));
    }

    info!(charts = entries.len(), "showing gallery dashboard");
    builder
        .show_with("gallery", opts)
        .map_err(|report| GalleryError::Chart {
            name: "gallery".to_string(),
            report: format!("{report:?}"),
        })
}
