use crate::render::components::{PlotId, PlotKind};
use serde::{Deserialize, Serialize};

/// Common metadata for all plot types
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotMeta {
    /// Title displayed at the top of the plot
    pub title: Option<String>,
    /// Optional description displayed below the plot
    pub description: Option<String>,
}

/// A single axis value: a number, or a category / ISO date string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Text(String),
}

macro_rules! datum_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Datum {
                #[inline]
                fn from(v: $t) -> Self {
                    Datum::Number(v as f64)
                }
            }
        )*
    };
}

datum_from_number!(f64, f32, i32, i64, u32);

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
    pub const fn with_a(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// `0xRRGGBB`
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
        )
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// CSS `rgba(r,g,b,a)` with 0..255 channels
    pub fn to_css(&self) -> String {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{})",
            ch(self.r),
            ch(self.g),
            ch(self.b),
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
        )
    }

    /// Relative luminance (Rec. 709 weights, no gamma correction)
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub size: f32,    // line width / marker size
    pub opacity: f32, // multiplied into alpha
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::hex(0x636efa),
            size: 2.0,
            opacity: 1.0,
        }
    }
}

impl Style {
    #[inline]
    pub const fn color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    #[inline]
    pub const fn rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.color(Color::rgb(r, g, b))
    }

    #[inline]
    pub const fn rgba(self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.color(Color::rgba(r, g, b, a))
    }

    #[inline]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Colour with opacity folded into alpha
    pub fn effective_color(&self) -> Color {
        self.color.with_a(self.color.a * self.opacity.clamp(0.0, 1.0))
    }
}

/// Axis type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    /// Let the charting library infer from the data
    #[default]
    Auto,
    Linear,
    Log10,
    Date,
    Categorical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Coolwarm, // diverging: blue-white-red
    RdBu,     // diverging: red-white-blue
    Blues,
    Reds,
    Greens,
}

impl Colormap {
    /// Name of the matching plotly.js built-in scale, if it ships one
    pub fn plotly_name(&self) -> Option<&'static str> {
        match self {
            Colormap::Viridis => Some("Viridis"),
            Colormap::Cividis => Some("Cividis"),
            Colormap::RdBu => Some("RdBu"),
            Colormap::Blues => Some("Blues"),
            Colormap::Reds => Some("Reds"),
            Colormap::Greens => Some("Greens"),
            Colormap::Plasma | Colormap::Inferno | Colormap::Magma | Colormap::Coolwarm => None,
        }
    }

    /// Map value in [0, 1] to a colour
    pub fn sample(&self, t: f32) -> Color {
        let anchors = self.anchors();
        let t = t.clamp(0.0, 1.0);
        let last = anchors.len() - 1;
        let pos = t * last as f32;
        let i = (pos.floor() as usize).min(last - 1);
        Color::hex(anchors[i]).lerp(Color::hex(anchors[i + 1]), pos - i as f32)
    }

    fn anchors(&self) -> &'static [u32] {
        match self {
            Colormap::Viridis => &[
                0x440154, 0x482878, 0x3e4989, 0x31688e, 0x26828e, 0x1f9e89, 0x35b779, 0x6ece58,
                0xb5de2b, 0xfde725,
            ],
            Colormap::Plasma => &[
                0x0d0887, 0x46039f, 0x7201a8, 0x9c179e, 0xbd3786, 0xd8576b, 0xed7953, 0xfb9f3a,
                0xfdca26, 0xf0f921,
            ],
            Colormap::Inferno => &[
                0x000004, 0x1b0c41, 0x4a0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9b06,
                0xf7d13d, 0xfcffa4,
            ],
            Colormap::Magma => &[
                0x000004, 0x180f3d, 0x440f76, 0x721f81, 0x9e2f7f, 0xcd4071, 0xf1605d, 0xfd9668,
                0xfeca8d, 0xfcfdbf,
            ],
            Colormap::Cividis => &[
                0x00224e, 0x123570, 0x3b496c, 0x575d6d, 0x707173, 0x8a8678, 0xa59c74, 0xc3b369,
                0xe1cc55, 0xfee838,
            ],
            Colormap::Coolwarm => &[0x3b4cc0, 0x8db0fe, 0xdddddd, 0xf49a7b, 0xb40426],
            Colormap::RdBu => &[0x67001f, 0xd6604d, 0xf7f7f7, 0x4393c3, 0x053061],
            Colormap::Blues => &[0xf7fbff, 0x9ecae1, 0x4292c6, 0x08306b],
            Colormap::Reds => &[0xfff5f0, 0xfc9272, 0xef3b2c, 0x67000d],
            Colormap::Greens => &[0xf7fcf5, 0xa1d99b, 0x41ab5d, 0x00441b],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Plot {
    Graph2D(Graph2D),
    Graph3D(Graph3D),
    Distribution(Distribution),
    Heatmap(Heatmap),
    Contour(Contour),
    Radial(Radial),
    Candlestick(Candlestick),
    Geo(Geo),
    Hierarchy(Hierarchy),
    Parallel(Parallel),
}

impl Plot {
    pub fn meta(&self) -> &PlotMeta {
        match self {
            Plot::Graph2D(g) => &g.meta,
            Plot::Graph3D(g) => &g.meta,
            Plot::Distribution(d) => d.meta(),
            Plot::Heatmap(h) => &h.meta,
            Plot::Contour(c) => &c.meta,
            Plot::Radial(Radial::Pie { meta, .. }) => meta,
            Plot::Candlestick(c) => &c.meta,
            Plot::Geo(g) => g.meta(),
            Plot::Hierarchy(h) => &h.meta,
            Plot::Parallel(p) => &p.meta,
        }
    }

    pub fn id(&self) -> PlotId {
        match self {
            Plot::Graph2D(g) => g.id,
            Plot::Graph3D(g) => g.id,
            Plot::Distribution(d) => d.id(),
            Plot::Heatmap(h) => h.id,
            Plot::Contour(c) => c.id,
            Plot::Radial(Radial::Pie { id, .. }) => *id,
            Plot::Candlestick(c) => c.id,
            Plot::Geo(g) => g.id(),
            Plot::Hierarchy(h) => h.id,
            Plot::Parallel(p) => p.id,
        }
    }

    pub fn kind(&self) -> PlotKind {
        match self {
            Plot::Graph2D(g) => g.kind(),
            Plot::Graph3D(_) => PlotKind::Surface,
            Plot::Distribution(Distribution::Histogram { .. }) => PlotKind::Histogram,
            Plot::Distribution(Distribution::BoxPlot { .. }) => PlotKind::Box,
            Plot::Distribution(Distribution::Violin { .. }) => PlotKind::Violin,
            Plot::Heatmap(_) => PlotKind::Heatmap,
            Plot::Contour(_) => PlotKind::Contour,
            Plot::Radial(_) => PlotKind::Pie,
            Plot::Candlestick(c) => match c.kind {
                CandleKind::Candlestick => PlotKind::Candlestick,
                CandleKind::Ohlc => PlotKind::Ohlc,
            },
            Plot::Geo(Geo::Choropleth { .. }) => PlotKind::Choropleth,
            Plot::Geo(Geo::ScatterGeo { .. }) => PlotKind::ScatterGeo,
            Plot::Hierarchy(h) => match h.kind {
                HierarchyKind::Sunburst => PlotKind::Sunburst,
                HierarchyKind::Treemap => PlotKind::Treemap,
            },
            Plot::Parallel(_) => PlotKind::Parallel,
        }
    }
}

/* -------------------- 2D -------------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graph2D {
    pub id: PlotId,
    pub meta: PlotMeta,
    pub layers: Vec<Layer2D>,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Default for Graph2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph2D {
    pub fn new() -> Self {
        Self {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            layers: vec![],
            x_scale: Scale::default(),
            y_scale: Scale::default(),
            x_label: None,
            y_label: None,
        }
    }

    pub fn with_layer(mut self, layer: Layer2D) -> Self {
        self.layers.push(layer);
        self
    }

    fn kind(&self) -> PlotKind {
        let mut kinds = self.layers.iter().map(Layer2D::kind);
        match kinds.next() {
            Some(first) if kinds.all(|k| k == first) => first,
            _ => PlotKind::Cartesian,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry2D {
    Line,
    Points,
    Area, // filled down to y = 0
    Bars,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer2D {
    pub geometry: Geometry2D,
    pub x: Vec<Datum>,
    pub y: Vec<f64>,
    pub style: Style,
    /// Legend entry for this layer
    pub name: Option<String>,
    /// For bubble charts: size of each point (optional, uses style.size if None)
    pub sizes: Option<Vec<f64>>,
}

impl Layer2D {
    pub fn new(geometry: Geometry2D, x: Vec<Datum>, y: Vec<f64>) -> Self {
        Self {
            geometry,
            x,
            y,
            style: Style::default(),
            name: None,
            sizes: None,
        }
    }

    fn kind(&self) -> PlotKind {
        match (self.geometry, &self.sizes) {
            (Geometry2D::Points, Some(_)) => PlotKind::Bubble,
            (Geometry2D::Points, None) => PlotKind::Scatter,
            (Geometry2D::Line, _) => PlotKind::Line,
            (Geometry2D::Area, _) => PlotKind::Area,
            (Geometry2D::Bars, _) => PlotKind::Bar,
        }
    }
}

/* -------------------- 3D -------------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graph3D {
    pub id: PlotId,
    pub meta: PlotMeta,
    pub layers: Vec<Layer3D>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub z_label: Option<String>,
}

impl Default for Graph3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph3D {
    pub fn new() -> Self {
        Self {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            layers: vec![],
            x_label: None,
            y_label: None,
            z_label: None,
        }
    }
}

/// Surface sampled on an `nx` x `ny` grid.
/// `xyz[j * nx + i]` is the point at column `i`, row `j`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer3D {
    pub nx: u32,
    pub ny: u32,
    pub xyz: Vec<[f64; 3]>,
    pub colormap: Colormap,
    pub opacity: f32,
}

/* -------------------- DISTRIBUTIONS -------------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Distribution {
    Histogram {
        id: PlotId,
        meta: PlotMeta,
        values: Vec<f64>,
        /// Upper bound on bin count; the library picks one if None
        bins: Option<usize>,
        style: Style,
        x_label: Option<String>,
        y_label: Option<String>,
    },
    BoxPlot {
        id: PlotId,
        meta: PlotMeta,
        /// Each group is (label, values)
        groups: Vec<(String, Vec<f64>)>,
        style: Style,
        x_label: Option<String>,
        y_label: Option<String>,
    },
    Violin {
        id: PlotId,
        meta: PlotMeta,
        groups: Vec<(String, Vec<f64>)>,
        /// Draw a box plot inside each violin
        show_box: bool,
        style: Style,
        x_label: Option<String>,
        y_label: Option<String>,
    },
}

impl Distribution {
    pub fn meta(&self) -> &PlotMeta {
        match self {
            Distribution::Histogram { meta, .. }
            | Distribution::BoxPlot { meta, .. }
            | Distribution::Violin { meta, .. } => meta,
        }
    }

    pub fn id(&self) -> PlotId {
        match self {
            Distribution::Histogram { id, .. }
            | Distribution::BoxPlot { id, .. }
            | Distribution::Violin { id, .. } => *id,
        }
    }
}

/* -------------------- FIELDS -------------------- */

/// 2D heatmap with labeled axes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub id: PlotId,
    pub meta: PlotMeta,
    /// (cols, rows)
    pub dims: (usize, usize),
    /// Row-major: `values[row * cols + col]`
    pub values: Vec<f64>,
    /// Colour range; auto if None
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    pub row_labels: Option<Vec<String>>,
    pub col_labels: Option<Vec<String>>,
    /// Print the value in each cell
    pub show_values: bool,
    pub colormap: Colormap,
}

/// Contour lines of `z[j][i]` sampled at `(x[i], y[j])`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub id: PlotId,
    pub meta: PlotMeta,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub colormap: Colormap,
    /// Colour bar title
    pub color_label: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

/* -------------------- RADIAL -------------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Radial {
    Pie {
        id: PlotId,
        meta: PlotMeta,
        slices: Vec<(String, f64)>, // label, value
    },
}

/* -------------------- FINANCIAL -------------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleKind {
    /// Filled bodies with wicks
    #[default]
    Candlestick,
    /// Open/close ticks on a high-low bar
    Ohlc,
}

/// OHLC price series for financial time series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    pub id: PlotId,
    pub meta: PlotMeta,
    pub kind: CandleKind,
    pub candles: Vec<OHLC>,
    pub up_color: Color,
    pub down_color: Color,
    pub range_slider: bool,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

/// Single OHLC candle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OHLC {
    pub x: Datum, // time/index
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OHLC {
    pub fn new(x: impl Into<Datum>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            x: x.into(),
            open,
            high,
            low,
            close,
        }
    }
}

/* -------------------- GEO -------------------- */

/// How choropleth `locations` are matched against the base map
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationMode {
    #[default]
    Iso3,
    UsaStates,
    CountryNames,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geo {
    Choropleth {
        id: PlotId,
        meta: PlotMeta,
        locations: Vec<String>,
        values: Vec<f64>,
        location_mode: LocationMode,
        colormap: Colormap,
        color_label: Option<String>,
    },
    ScatterGeo {
        id: PlotId,
        meta: PlotMeta,
        lat: Vec<f64>,
        lon: Vec<f64>,
        /// Label drawn next to each marker
        text: Option<Vec<String>>,
        style: Style,
    },
}

impl Geo {
    pub fn meta(&self) -> &PlotMeta {
        match self {
            Geo::Choropleth { meta, .. } | Geo::ScatterGeo { meta, .. } => meta,
        }
    }

    pub fn id(&self) -> PlotId {
        match self {
            Geo::Choropleth { id, .. } | Geo::ScatterGeo { id, .. } => *id,
        }
    }
}

/* -------------------- HIERARCHY -------------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HierarchyKind {
    #[default]
    Sunburst,
    Treemap,
}

/// How a parent's value relates to its children's
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchValues {
    /// Parent value is added on top of its children
    #[default]
    Remainder,
    /// Parent value is the total of itself and its children
    Total,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub label: String,
    /// Empty for root nodes
    pub parent: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub id: PlotId,
    pub meta: PlotMeta,
    pub kind: HierarchyKind,
    pub nodes: Vec<HierarchyNode>,
    pub branch_values: BranchValues,
}

/* -------------------- MULTIVARIATE -------------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parallel {
    pub id: PlotId,
    pub meta: PlotMeta,
    /// One vertical axis per (label, values); all the same length
    pub dimensions: Vec<(String, Vec<f64>)>,
    /// Dimension whose values colour the lines
    pub color_by: Option<usize>,
    pub colormap: Colormap,
}

/* -------------------- DASHBOARD -------------------- */

/// A tab containing a set of plots
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub name: String,
    pub plots: Vec<Plot>,
    pub columns: Option<usize>,
}

impl Tab {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plots: vec![],
            columns: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Page title
    pub title: Option<String>,
    pub background: Color,
    /// Direct plots (when not using tabs)
    pub plots: Vec<Plot>,
    /// Number of columns per row (default: auto based on plot count)
    pub columns: Option<usize>,
    /// Tabs (alternative to direct plots)
    pub tabs: Vec<Tab>,
    /// Tab shown when the page opens
    pub active_tab: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            title: None,
            background: Color::WHITE,
            plots: vec![],
            columns: None,
            tabs: vec![],
            active_tab: 0,
        }
    }
}

impl Dashboard {
    /// Returns true if this dashboard uses tabs
    pub fn has_tabs(&self) -> bool {
        !self.tabs.is_empty()
    }

    /// Get the active plots (from active tab if using tabs, otherwise direct plots)
    pub fn active_plots(&self) -> &[Plot] {
        if self.has_tabs() {
            self.tabs
                .get(self.active_tab)
                .map(|t| t.plots.as_slice())
                .unwrap_or(&[])
        } else {
            &self.plots
        }
    }

    /// Get tab names for UI
    pub fn tab_names(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.name.as_str()).collect()
    }

    /// Plots across the direct list and every tab
    pub fn plot_count(&self) -> usize {
        self.plots.len() + self.tabs.iter().map(|t| t.plots.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datum_serializes_untagged() {
        let xs: Vec<Datum> = vec![2015.into(), "A".into(), 1.5f32.into()];
        let json = serde_json::to_value(&xs).unwrap();
        assert_eq!(json, serde_json::json!([2015.0, "A", 1.5]));
    }

    #[test]
    fn css_color_uses_byte_channels() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.5).to_css(), "rgba(255,0,128,1)");
        assert_eq!(Color::hex(0x102030).with_a(0.5).to_css(), "rgba(16,32,48,0.5)");
    }

    #[test]
    fn colormap_sample_hits_end_anchors() {
        assert_eq!(Colormap::Viridis.sample(0.0), Color::hex(0x440154));
        assert_eq!(Colormap::Viridis.sample(1.0), Color::hex(0xfde725));
        assert_eq!(Colormap::Blues.sample(-3.0), Color::hex(0xf7fbff));
    }

    #[test]
    fn graph_kind_follows_layers() {
        let line = Layer2D::new(Geometry2D::Line, vec![1.into()], vec![1.0]);
        let bars = Layer2D::new(Geometry2D::Bars, vec![1.into()], vec![1.0]);
        let mut bubble = Layer2D::new(Geometry2D::Points, vec![1.into()], vec![1.0]);
        bubble.sizes = Some(vec![3.0]);

        let g = Graph2D::new().with_layer(line.clone());
        assert_eq!(Plot::Graph2D(g).kind(), PlotKind::Line);

        let g = Graph2D::new().with_layer(bubble);
        assert_eq!(Plot::Graph2D(g).kind(), PlotKind::Bubble);

        let g = Graph2D::new().with_layer(line).with_layer(bars);
        assert_eq!(Plot::Graph2D(g).kind(), PlotKind::Cartesian);
    }

    #[test]
    fn active_plots_follow_tabs() {
        let mut d = Dashboard::default();
        d.plots.push(Plot::Graph2D(Graph2D::new()));
        assert_eq!(d.active_plots().len(), 1);

        let mut tab = Tab::new("one");
        tab.columns = Some(3);
        tab.plots.push(Plot::Graph3D(Graph3D::new()));
        tab.plots.push(Plot::Graph3D(Graph3D::new()));
        d.tabs.push(tab);

        assert!(d.has_tabs());
        assert_eq!(d.active_plots().len(), 2);
        assert_eq!(d.tab_names(), vec!["one"]);
        assert_eq!(d.plot_count(), 3);

        d.active_tab = 7;
        assert!(d.active_plots().is_empty());
    }
}
