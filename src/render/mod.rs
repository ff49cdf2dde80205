pub mod components;
mod draw;
pub mod resources;

pub use components::*;
pub use draw::Theme;
pub use resources::*;

use error_stack::{Report, ResultExt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{ChartError, Result};
use crate::core::{Dashboard, Plot};

/// One plot encoded as a plotly.js figure
#[derive(Clone, Debug, Serialize)]
pub struct PlotFigure {
    pub id: PlotId,
    pub kind: PlotKind,
    pub data: Vec<Value>,
    pub layout: Value,
    /// Caption shown under the plot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A group of figures laid out together: the whole page, or one tab
#[derive(Clone, Debug, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub columns: usize,
    pub figures: Vec<PlotFigure>,
}

pub fn encode_plot(plot: &Plot, theme: &Theme) -> Result<PlotFigure> {
    let kind = plot.kind();
    let encoded = match plot {
        Plot::Graph2D(g) => draw::encode_2d(g, theme),
        Plot::Graph3D(g) => draw::encode_3d(g, theme),
        Plot::Distribution(d) => draw::encode_distribution(d, theme),
        Plot::Heatmap(h) => draw::encode_heatmap(h, theme),
        Plot::Contour(c) => draw::encode_contour(c, theme),
        Plot::Radial(r) => draw::encode_radial(r, theme),
        Plot::Candlestick(c) => draw::encode_candlestick(c, theme),
        Plot::Geo(g) => draw::encode_geo(g, theme),
        Plot::Hierarchy(h) => draw::encode_hierarchy(h, theme),
        Plot::Parallel(p) => draw::encode_parallel(p, theme),
    }
    .attach(format!(
        "while encoding {kind} plot {:?}",
        plot.meta().title.as_deref().unwrap_or("<untitled>")
    ))?;

    debug!(%kind, traces = encoded.data.len(), "encoded plot");

    Ok(PlotFigure {
        id: plot.id(),
        kind,
        data: encoded.data,
        layout: encoded.layout,
        description: plot.meta().description.clone(),
    })
}

/// Encode every plot of the dashboard, one section per tab (or a single
/// untitled section when the dashboard has no tabs). Direct plots next to
/// tabs, empty tabs and dashboards without plots are errors.
pub fn encode_sections(dashboard: &Dashboard) -> Result<Vec<Section>> {
    let theme = Theme::from_background(dashboard.background);
    let encode_all = |plots: &[Plot]| {
        plots
            .iter()
            .map(|p| encode_plot(p, &theme))
            .collect::<Result<Vec<_>>>()
    };

    if !dashboard.has_tabs() {
        if dashboard.plots.is_empty() {
            return Err(Report::new(ChartError::EmptyDashboard));
        }
        let figures = encode_all(dashboard.plots.as_slice())?;
        return Ok(vec![Section {
            name: None,
            columns: dashboard
                .columns
                .unwrap_or_else(|| auto_columns(figures.len())),
            figures,
        }]);
    }

    if !dashboard.plots.is_empty() {
        return Err(Report::new(ChartError::MixedLayout {
            direct: dashboard.plots.len(),
        }));
    }

    dashboard
        .tabs
        .iter()
        .map(|tab| -> Result<Section> {
            if tab.plots.is_empty() {
                return Err(Report::new(ChartError::EmptyTab {
                    name: tab.name.clone(),
                }));
            }
            let figures = encode_all(tab.plots.as_slice())?;
            Ok(Section {
                name: Some(tab.name.clone()),
                columns: tab
                    .columns
                    .or(dashboard.columns)
                    .unwrap_or_else(|| auto_columns(figures.len())),
                figures,
            })
        })
        .collect()
}

/// Roughly square grid
fn auto_columns(n: usize) -> usize {
    ((n as f64).sqrt().ceil() as usize).clamp(1, 4)
}
