use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlotId(pub u64);

impl Default for PlotId {
    fn default() -> Self {
        static CTR: AtomicU64 = AtomicU64::new(1);
        Self(CTR.fetch_add(1, Ordering::Relaxed))
    }
}

impl PlotId {
    pub fn new() -> Self {
        Self::default()
    }

    /// DOM id of the plot's container on the page
    pub fn dom_id(&self) -> String {
        format!("plot-{}", self.0)
    }
}

/// Chart type a plot renders as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    Line,
    Scatter,
    Bubble,
    Area,
    Bar,
    /// 2D graph mixing layer geometries
    Cartesian,
    Surface,
    Histogram,
    Box,
    Violin,
    Heatmap,
    Contour,
    Pie,
    Candlestick,
    Ohlc,
    Choropleth,
    ScatterGeo,
    Sunburst,
    Treemap,
    Parallel,
}

impl PlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotKind::Line => "line",
            PlotKind::Scatter => "scatter",
            PlotKind::Bubble => "bubble",
            PlotKind::Area => "area",
            PlotKind::Bar => "bar",
            PlotKind::Cartesian => "cartesian",
            PlotKind::Surface => "surface",
            PlotKind::Histogram => "histogram",
            PlotKind::Box => "box",
            PlotKind::Violin => "violin",
            PlotKind::Heatmap => "heatmap",
            PlotKind::Contour => "contour",
            PlotKind::Pie => "pie",
            PlotKind::Candlestick => "candlestick",
            PlotKind::Ohlc => "ohlc",
            PlotKind::Choropleth => "choropleth",
            PlotKind::ScatterGeo => "scatter_geo",
            PlotKind::Sunburst => "sunburst",
            PlotKind::Treemap => "treemap",
            PlotKind::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
