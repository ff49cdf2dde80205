//! Common encoding utilities shared across chart types.

use crate::core::{Color, Colormap, PlotMeta, Scale};
use crate::{ChartError, Result};
use error_stack::Report;
use serde_json::{Value, json};

/// Stops used when plotly.js has no built-in scale for a colormap.
const COLORSCALE_STOPS: usize = 10;

/// One plot's plotly.js traces and layout.
#[derive(Clone, Debug)]
pub struct Encoded {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// Page colours derived from the dashboard background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub grid: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_background(Color::WHITE)
    }
}

impl Theme {
    pub fn from_background(background: Color) -> Self {
        if background.luminance() < 0.5 {
            Self {
                background,
                foreground: Color::rgb(0.9, 0.9, 0.92),
                grid: Color::rgba(1.0, 1.0, 1.0, 0.12),
            }
        } else {
            Self {
                background,
                foreground: Color::rgb(0.16, 0.16, 0.2),
                grid: Color::rgba(0.0, 0.0, 0.0, 0.1),
            }
        }
    }
}

/// Layout shared by every plot: title, colours, margins.
pub fn base_layout(meta: &PlotMeta, theme: &Theme) -> Value {
    let mut layout = json!({
        "paper_bgcolor": theme.background.to_css(),
        "plot_bgcolor": theme.background.to_css(),
        "font": { "color": theme.foreground.to_css() },
        "margin": { "t": 60, "r": 30, "b": 50, "l": 60 },
    });
    if let Some(title) = &meta.title {
        layout["title"] = json!({ "text": title });
    }
    layout
}

/// Cartesian axis with optional title.
pub fn axis(label: Option<&str>, scale: Scale, theme: &Theme) -> Value {
    let mut axis = json!({
        "gridcolor": theme.grid.to_css(),
        "zerolinecolor": theme.grid.to_css(),
    });
    if let Some(label) = label {
        axis["title"] = json!({ "text": label });
    }
    if let Some(kind) = axis_type(scale) {
        axis["type"] = json!(kind);
    }
    axis
}

fn axis_type(scale: Scale) -> Option<&'static str> {
    match scale {
        Scale::Auto => None,
        Scale::Linear => Some("linear"),
        Scale::Log10 => Some("log"),
        Scale::Date => Some("date"),
        Scale::Categorical => Some("category"),
    }
}

/// plotly colorscale: the built-in name if there is one, sampled stops otherwise.
pub fn colorscale(cm: Colormap) -> Value {
    if let Some(name) = cm.plotly_name() {
        return json!(name);
    }
    let stops: Vec<Value> = (0..=COLORSCALE_STOPS)
        .map(|i| {
            let t = i as f32 / COLORSCALE_STOPS as f32;
            json!([t, cm.sample(t).to_css()])
        })
        .collect();
    Value::Array(stops)
}

pub fn colorbar(title: Option<&str>) -> Value {
    match title {
        Some(text) => json!({ "title": { "text": text } }),
        None => json!({}),
    }
}

/// Parallel sequences must line up.
pub fn check_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Report::new(ChartError::LengthMismatch {
            what,
            expected,
            found,
        }));
    }
    Ok(())
}

pub fn check_grid(what: &'static str, rows: usize, cols: usize, found: usize) -> Result<()> {
    if rows.checked_mul(cols) != Some(found) {
        return Err(Report::new(ChartError::GridMismatch {
            what,
            rows,
            cols,
            found,
        }));
    }
    Ok(())
}
