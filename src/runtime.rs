use std::fs;
use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use tracing::{info, warn};

use crate::core::Dashboard;
use crate::render::{render_json, render_page};
use crate::{ChartError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Standalone page rendered by plotly.js
    #[default]
    Html,
    /// Encoded plotly figures only
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Where and how `show` writes its output
#[derive(Clone, Debug)]
pub struct ShowOptions {
    /// Directory the page is written into (created if missing)
    pub out_dir: PathBuf,
    /// Open HTML output in the default browser
    pub open_browser: bool,
    pub format: OutputFormat,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            out_dir: std::env::temp_dir().join("chartbook"),
            open_browser: true,
            format: OutputFormat::Html,
        }
    }
}

impl ShowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn no_browser(mut self) -> Self {
        self.open_browser = false;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Write the dashboard to `<out_dir>/<slug(name)>.<ext>` and, for HTML,
/// hand it to the default browser. Returns the written path.
pub fn show_dashboard(dashboard: &Dashboard, name: &str, opts: &ShowOptions) -> Result<PathBuf> {
    let body = match opts.format {
        OutputFormat::Html => render_page(dashboard)?,
        OutputFormat::Json => render_json(dashboard)?,
    };

    let path = opts
        .out_dir
        .join(format!("{}.{}", slugify(name), opts.format.extension()));

    fs::create_dir_all(&opts.out_dir)
        .change_context(ChartError::Write {
            path: opts.out_dir.clone(),
        })?;
    fs::write(&path, body).change_context(ChartError::Write { path: path.clone() })?;
    info!(path = %path.display(), plots = dashboard.plot_count(), "wrote dashboard");

    if opts.open_browser && opts.format == OutputFormat::Html {
        open_in_browser(&path);
    }

    Ok(path)
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_browser(path: &Path) {
    if let Err(e) = open::that(path) {
        warn!(path = %path.display(), error = %e, "could not open browser");
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_browser(path: &Path) {
    warn!(path = %path.display(), "no browser to open on this target");
}

/// File-name friendly version of a chart name: lowercase ASCII
/// alphanumerics separated by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("dashboard");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Plot, PlotMeta, Radial};
    use crate::render::PlotId;

    fn dashboard() -> Dashboard {
        let mut d = Dashboard::default();
        d.plots.push(Plot::Radial(Radial::Pie {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            slices: vec![("A".into(), 1.0)],
        }));
        d
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Line Chart Example"), "line-chart-example");
        assert_eq!(
            slugify("OHLC (Open, High, Low, Close)) Chart "),
            "ohlc-open-high-low-close-chart"
        );
        assert_eq!(slugify("three_d_surface_plot"), "three-d-surface-plot");
        assert_eq!(slugify("  !!"), "dashboard");
    }

    #[test]
    fn writes_html_into_fresh_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = ShowOptions::new()
            .out_dir(tmp.path().join("nested"))
            .no_browser();
        let path = show_dashboard(&dashboard(), "Pie Chart", &opts).unwrap();
        assert_eq!(path, tmp.path().join("nested").join("pie-chart.html"));
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("plotly"));
    }

    #[test]
    fn writes_json() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = ShowOptions::new()
            .out_dir(tmp.path())
            .format(OutputFormat::Json);
        let path = show_dashboard(&dashboard(), "pie", &opts).unwrap();
        assert_eq!(path.extension().unwrap(), "json");
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["sections"][0]["figures"][0]["data"][0]["type"], "pie");
    }

    #[test]
    fn empty_dashboard_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = ShowOptions::new().out_dir(tmp.path()).no_browser();
        let err = show_dashboard(&Dashboard::default(), "empty", &opts).unwrap_err();
        assert!(matches!(err.current_context(), ChartError::EmptyDashboard));
        assert!(!tmp.path().join("empty.html").exists());
    }

    #[test]
    fn unwritable_target_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let opts = ShowOptions::new().out_dir(&blocker).no_browser();
        let err = show_dashboard(&dashboard(), "pie", &opts).unwrap_err();
        match err.current_context() {
            ChartError::Write { path } => assert_eq!(path, &blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}
