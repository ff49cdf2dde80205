//! plotly.js encoders for all chart types.
//!
//! This module is organized into focused submodules:
//! - `common`: Shared utilities (theme, layout, axes, colorscales, shape checks)
//! - `charts_2d`: Line, scatter, bubble, area and bar plots
//! - `charts_3d`: Surface plots
//! - `distribution`: Histogram, box plot, violin
//! - `financial`: Candlestick/OHLC charts
//! - `heatmap`: Heatmaps and contour plots
//! - `radial`: Pie charts
//! - `geo`: Choropleth and scatter-on-map
//! - `hierarchy`: Sunburst and treemap
//! - `parallel`: Parallel coordinates

mod charts_2d;
mod charts_3d;
mod common;
mod distribution;
mod financial;
mod geo;
mod heatmap;
mod hierarchy;
mod parallel;
mod radial;

pub use charts_2d::encode_2d;
pub use charts_3d::encode_3d;
pub use common::{Encoded, Theme};
pub use distribution::encode_distribution;
pub use financial::encode_candlestick;
pub use geo::encode_geo;
pub use heatmap::{encode_contour, encode_heatmap};
pub use hierarchy::encode_hierarchy;
pub use parallel::encode_parallel;
pub use radial::encode_radial;
