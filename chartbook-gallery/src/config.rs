//! Gallery configuration

use std::path::PathBuf;

use chartbook::runtime::{OutputFormat, ShowOptions};
use clap::{Parser, ValueEnum};

use crate::charts::{self, CHARTS, ChartEntry};
use crate::error::{GalleryError, Result};

/// Chartbook gallery
#[derive(Parser, Clone, Debug)]
#[command(name = "chartbook-gallery")]
#[command(about = "Show every chart type chartbook supports, one after the other")]
pub struct Config {
    /// Charts to show, by function name (default: all, in gallery order)
    #[arg(short = 'c', long = "chart", value_delimiter = ',')]
    pub charts: Vec<String>,

    /// List chart names and exit
    #[arg(long)]
    pub list: bool,

    /// Show the selected charts as tabs of a single page
    #[arg(long)]
    pub dashboard: bool,

    /// Directory pages are written to (default: <tmp>/chartbook)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Write pages without opening a browser
    #[arg(long)]
    pub no_browser: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Html => OutputFormat::Html,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Config {
    /// Catalog entries named by `--chart`, in the order given
    pub fn selected(&self) -> Result<Vec<&'static ChartEntry>> {
        if self.charts.is_empty() {
            return Ok(CHARTS.iter().collect());
        }
        self.charts
            .iter()
            .map(|name| {
                let name = name.trim();
                charts::find(name).ok_or_else(|| GalleryError::UnknownChart(name.to_string()))
            })
            .collect()
    }

    pub fn show_options(&self) -> ShowOptions {
        let mut opts = ShowOptions::new().format(self.format.into());
        if let Some(dir) = &self.out_dir {
            opts = opts.out_dir(dir);
        }
        if self.no_browser {
            opts = opts.no_browser();
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("chartbook-gallery").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_select_everything() {
        let config = parse(&[]);
        assert_eq!(config.selected().unwrap().len(), CHARTS.len());
        let opts = config.show_options();
        assert!(opts.open_browser);
        assert_eq!(opts.format, OutputFormat::Html);
    }

    #[test]
    fn chart_list_keeps_given_order() {
        let config = parse(&["-c", "pie_chart,bar_chart", "--chart", "heatmap"]);
        let names: Vec<&str> = config.selected().unwrap().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["pie_chart", "bar_chart", "heatmap"]);
    }

    #[test]
    fn unknown_chart_is_rejected() {
        let config = parse(&["-c", "radar"]);
        assert!(matches!(
            config.selected(),
            Err(GalleryError::UnknownChart(name)) if name == "radar"
        ));
    }

    #[test]
    fn output_flags() {
        let config = parse(&["--no-browser", "--format", "json", "--out-dir", "/tmp/out"]);
        let opts = config.show_options();
        assert!(!opts.open_browser);
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.out_dir, PathBuf::from("/tmp/out"));
    }
}
