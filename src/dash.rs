use std::path::PathBuf;

use crate::core::{
    BranchValues, CandleKind, Candlestick, Color, Colormap, Contour, Dashboard, Datum,
    Distribution, Geo, Geometry2D, Graph2D, Graph3D, Heatmap, Hierarchy, HierarchyKind,
    HierarchyNode, Layer2D, Layer3D, LocationMode, OHLC, Parallel, Plot, PlotMeta, Radial, Scale,
    Style, Tab,
};
use crate::render::PlotId;
use crate::runtime::{ShowOptions, show_dashboard};

pub fn dash() -> DashBuilder {
    DashBuilder {
        dash: Dashboard::default(),
    }
}

/// `add_*` methods shared by the dashboard and tab builders; each expects
/// an `add_plot(self, Plot) -> Self` on the implementing builder.
macro_rules! plot_adders {
    () => {
        pub fn add_2d<F>(self, f: F) -> Self
        where
            F: FnOnce(Plot2DBuilder) -> Plot2DBuilder,
        {
            let b = f(Plot2DBuilder::new());
            self.add_plot(Plot::Graph2D(b.graph))
        }

        pub fn add_3d<F>(self, f: F) -> Self
        where
            F: FnOnce(Plot3DBuilder) -> Plot3DBuilder,
        {
            let b = f(Plot3DBuilder::new());
            self.add_plot(Plot::Graph3D(b.graph))
        }

        pub fn add_distribution<F>(self, f: F) -> Self
        where
            F: FnOnce(DistBuilder) -> DistBuilder,
        {
            let b = f(DistBuilder::new());
            self.add_plot(Plot::Distribution(b.dist))
        }

        pub fn add_heatmap<F>(self, f: F) -> Self
        where
            F: FnOnce(HeatmapBuilder) -> HeatmapBuilder,
        {
            let b = f(HeatmapBuilder::new());
            self.add_plot(Plot::Heatmap(b.heatmap))
        }

        pub fn add_contour<F>(self, f: F) -> Self
        where
            F: FnOnce(ContourBuilder) -> ContourBuilder,
        {
            let b = f(ContourBuilder::new());
            self.add_plot(Plot::Contour(b.contour))
        }

        pub fn add_radial<F>(self, f: F) -> Self
        where
            F: FnOnce(RadialBuilder) -> RadialBuilder,
        {
            let b = f(RadialBuilder::new());
            self.add_plot(Plot::Radial(b.rad))
        }

        pub fn add_candlestick<F>(self, f: F) -> Self
        where
            F: FnOnce(CandlestickBuilder) -> CandlestickBuilder,
        {
            let b = f(CandlestickBuilder::new());
            self.add_plot(Plot::Candlestick(b.candle))
        }

        pub fn add_geo<F>(self, f: F) -> Self
        where
            F: FnOnce(GeoBuilder) -> GeoBuilder,
        {
            let b = f(GeoBuilder::new());
            self.add_plot(Plot::Geo(b.geo))
        }

        pub fn add_hierarchy<F>(self, f: F) -> Self
        where
            F: FnOnce(HierarchyBuilder) -> HierarchyBuilder,
        {
            let b = f(HierarchyBuilder::new());
            self.add_plot(Plot::Hierarchy(b.tree))
        }

        pub fn add_parallel<F>(self, f: F) -> Self
        where
            F: FnOnce(ParallelBuilder) -> ParallelBuilder,
        {
            let b = f(ParallelBuilder::new());
            self.add_plot(Plot::Parallel(b.parallel))
        }
    };
}

pub struct DashBuilder {
    dash: Dashboard,
}

impl DashBuilder {
    /// Page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.dash.title = Some(title.into());
        self
    }

    pub fn background_color(mut self, c: Color) -> Self {
        self.dash.background = c;
        self
    }

    /// Set the number of columns per row (default: auto based on plot count)
    pub fn columns(mut self, cols: usize) -> Self {
        self.dash.columns = Some(cols.max(1));
        self
    }

    /// Add an already built plot
    pub fn add_plot(mut self, plot: Plot) -> Self {
        self.dash.plots.push(plot);
        self
    }

    plot_adders!();

    /// Add a tab to the dashboard
    pub fn add_tab<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(TabBuilder) -> TabBuilder,
    {
        let b = f(TabBuilder::new(name));
        self.dash.tabs.push(b.tab);
        self
    }

    /// Get the built Dashboard without showing it
    pub fn build(self) -> Dashboard {
        self.dash
    }

    /// Write the page to the temp directory and open it in the browser
    pub fn show(self) -> crate::Result<PathBuf> {
        let name = self
            .dash
            .title
            .clone()
            .or_else(|| {
                self.dash
                    .active_plots()
                    .first()
                    .and_then(|p| p.meta().title.clone())
            })
            .unwrap_or_else(|| "dashboard".to_string());
        show_dashboard(&self.dash, &name, &ShowOptions::default())
    }

    pub fn show_with(self, name: &str, opts: &ShowOptions) -> crate::Result<PathBuf> {
        show_dashboard(&self.dash, name, opts)
    }
}

/* -------------------- TAB BUILDER -------------------- */

pub struct TabBuilder {
    tab: Tab,
}

impl TabBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            tab: Tab::new(name),
        }
    }

    /// Set the number of columns per row for this tab
    pub fn columns(mut self, cols: usize) -> Self {
        self.tab.columns = Some(cols.max(1));
        self
    }

    pub fn add_plot(mut self, plot: Plot) -> Self {
        self.tab.plots.push(plot);
        self
    }

    /// Add several built plots at once
    pub fn add_plots(mut self, plots: impl IntoIterator<Item = Plot>) -> Self {
        self.tab.plots.extend(plots);
        self
    }

    plot_adders!();
}

/* -------------------- PLOT 2D BUILDER -------------------- */

pub struct Plot2DBuilder {
    graph: Graph2D,
}

impl Plot2DBuilder {
    fn new() -> Self {
        Self {
            graph: Graph2D::new(),
        }
    }

    fn push_layer<X: Into<Datum>>(
        mut self,
        geometry: Geometry2D,
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = f64>,
        style: Option<Style>,
    ) -> Self {
        let mut layer = Layer2D::new(
            geometry,
            x.into_iter().map(Into::into).collect(),
            y.into_iter().collect(),
        );
        if let Some(st) = style {
            layer.style = st;
        }
        self.graph.layers.push(layer);
        self
    }

    pub fn line<X: Into<Datum>>(
        self,
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = f64>,
        style: impl Into<Option<Style>>,
    ) -> Self {
        self.push_layer(Geometry2D::Line, x, y, style.into())
    }

    pub fn scatter<X: Into<Datum>>(
        self,
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = f64>,
        style: impl Into<Option<Style>>,
    ) -> Self {
        self.push_layer(Geometry2D::Points, x, y, style.into())
    }

    pub fn area<X: Into<Datum>>(
        self,
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = f64>,
        style: impl Into<Option<Style>>,
    ) -> Self {
        self.push_layer(Geometry2D::Area, x, y, style.into())
    }

    pub fn bars<X: Into<Datum>>(
        self,
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = f64>,
        style: impl Into<Option<Style>>,
    ) -> Self {
        self.push_layer(Geometry2D::Bars, x, y, style.into())
    }

    /// Bubble chart (scatter with variable point sizes)
    pub fn bubble<X: Into<Datum>>(
        self,
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = f64>,
        sizes: impl IntoIterator<Item = f64>,
        style: impl Into<Option<Style>>,
    ) -> Self {
        let mut b = self.push_layer(Geometry2D::Points, x, y, style.into());
        if let Some(layer) = b.graph.layers.last_mut() {
            layer.sizes = Some(sizes.into_iter().collect());
        }
        b
    }

    /// Legend name for the most recently added layer
    pub fn name(mut self, name: impl Into<String>) -> Self {
        if let Some(layer) = self.graph.layers.last_mut() {
            layer.name = Some(name.into());
        }
        self
    }

    /// Set the X-axis label
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.graph.x_label = Some(label.into());
        self
    }

    /// Set the Y-axis label
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.graph.y_label = Some(label.into());
        self
    }

    pub fn x_scale(mut self, scale: Scale) -> Self {
        self.graph.x_scale = scale;
        self
    }

    pub fn y_scale(mut self, scale: Scale) -> Self {
        self.graph.y_scale = scale;
        self
    }

    /// Set the plot title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.graph.meta.title = Some(title.into());
        self
    }

    /// Set the plot description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.graph.meta.description = Some(desc.into());
        self
    }
}

// Allow passing &Style into the `impl Into<Option<Style>>` slot.
// std already provides From<Style> for Option<Style>.
impl From<&Style> for Option<Style> {
    #[inline]
    fn from(s: &Style) -> Self {
        Some(*s)
    }
}

/* -------------------- PLOT 3D BUILDER -------------------- */

pub struct Plot3DBuilder {
    graph: Graph3D,
}

impl Plot3DBuilder {
    fn new() -> Self {
        Self {
            graph: Graph3D::new(),
        }
    }

    /// Surface from grid points, `xyz[j * nx + i]` at column `i`, row `j`
    pub fn surface(mut self, xyz: Vec<[f64; 3]>, nx: u32, ny: u32) -> Self {
        self.graph.layers.push(Layer3D {
            nx,
            ny,
            xyz,
            colormap: Colormap::default(),
            opacity: 1.0,
        });
        self
    }

    /// Surface `z = f(x, y)` sampled over every `(x, y)` pair of the two axes
    pub fn surface_fn(self, xs: &[f64], ys: &[f64], f: impl Fn(f64, f64) -> f64) -> Self {
        let xyz = ys
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
            .map(|(x, y)| [x, y, f(x, y)])
            .collect();
        self.surface(xyz, xs.len() as u32, ys.len() as u32)
    }

    /// Colormap of the most recently added surface
    pub fn colormap(mut self, cm: Colormap) -> Self {
        if let Some(layer) = self.graph.layers.last_mut() {
            layer.colormap = cm;
        }
        self
    }

    /// Set the plot title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.graph.meta.title = Some(title.into());
        self
    }

    /// Set the plot description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.graph.meta.description = Some(desc.into());
        self
    }

    /// Set the X-axis label
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.graph.x_label = Some(label.into());
        self
    }

    /// Set the Y-axis label
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.graph.y_label = Some(label.into());
        self
    }

    /// Set the Z-axis label
    pub fn z_label(mut self, label: impl Into<String>) -> Self {
        self.graph.z_label = Some(label.into());
        self
    }
}

/* -------------------- DISTRIBUTION BUILDER -------------------- */

pub struct DistBuilder {
    dist: Distribution,
}

/// Fields every distribution variant carries, kept when switching variant.
struct DistCommon {
    id: PlotId,
    meta: PlotMeta,
    style: Style,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl DistBuilder {
    fn new() -> Self {
        Self {
            dist: Distribution::Histogram {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                values: vec![],
                bins: None,
                style: Style::default(),
                x_label: None,
                y_label: None,
            },
        }
    }

    fn common(&self) -> DistCommon {
        match &self.dist {
            Distribution::Histogram {
                id,
                meta,
                style,
                x_label,
                y_label,
                ..
            }
            | Distribution::BoxPlot {
                id,
                meta,
                style,
                x_label,
                y_label,
                ..
            }
            | Distribution::Violin {
                id,
                meta,
                style,
                x_label,
                y_label,
                ..
            } => DistCommon {
                id: *id,
                meta: meta.clone(),
                style: *style,
                x_label: x_label.clone(),
                y_label: y_label.clone(),
            },
        }
    }

    pub fn histogram(mut self, values: Vec<f64>) -> Self {
        let c = self.common();
        self.dist = Distribution::Histogram {
            id: c.id,
            meta: c.meta,
            values,
            bins: None,
            style: c.style,
            x_label: c.x_label,
            y_label: c.y_label,
        };
        self
    }

    /// Maximum bin count hint for histograms
    pub fn bins(mut self, n: usize) -> Self {
        if let Distribution::Histogram { bins, .. } = &mut self.dist {
            *bins = Some(n.max(1));
        }
        self
    }

    pub fn boxplot(mut self, groups: Vec<(impl Into<String>, Vec<f64>)>) -> Self {
        let c = self.common();
        self.dist = Distribution::BoxPlot {
            id: c.id,
            meta: c.meta,
            groups: groups.into_iter().map(|(l, v)| (l.into(), v)).collect(),
            style: c.style,
            x_label: c.x_label,
            y_label: c.y_label,
        };
        self
    }

    pub fn violin(mut self, groups: Vec<(impl Into<String>, Vec<f64>)>) -> Self {
        let c = self.common();
        self.dist = Distribution::Violin {
            id: c.id,
            meta: c.meta,
            groups: groups.into_iter().map(|(l, v)| (l.into(), v)).collect(),
            show_box: false,
            style: c.style,
            x_label: c.x_label,
            y_label: c.y_label,
        };
        self
    }

    /// Draw a box plot inside each violin
    pub fn show_box(mut self, show: bool) -> Self {
        if let Distribution::Violin { show_box, .. } = &mut self.dist {
            *show_box = show;
        }
        self
    }

    pub fn style(mut self, s: Style) -> Self {
        match &mut self.dist {
            Distribution::Histogram { style, .. }
            | Distribution::BoxPlot { style, .. }
            | Distribution::Violin { style, .. } => *style = s,
        }
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        match &mut self.dist {
            Distribution::Histogram { x_label, .. }
            | Distribution::BoxPlot { x_label, .. }
            | Distribution::Violin { x_label, .. } => *x_label = Some(label.into()),
        }
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        match &mut self.dist {
            Distribution::Histogram { y_label, .. }
            | Distribution::BoxPlot { y_label, .. }
            | Distribution::Violin { y_label, .. } => *y_label = Some(label.into()),
        }
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        match &mut self.dist {
            Distribution::Histogram { meta, .. }
            | Distribution::BoxPlot { meta, .. }
            | Distribution::Violin { meta, .. } => meta.title = Some(title.into()),
        }
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        match &mut self.dist {
            Distribution::Histogram { meta, .. }
            | Distribution::BoxPlot { meta, .. }
            | Distribution::Violin { meta, .. } => meta.description = Some(desc.into()),
        }
        self
    }
}

/* -------------------- HEATMAP BUILDER -------------------- */

pub struct HeatmapBuilder {
    heatmap: Heatmap,
}

impl HeatmapBuilder {
    fn new() -> Self {
        Self {
            heatmap: Heatmap {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                dims: (0, 0),
                values: vec![],
                vmin: None,
                vmax: None,
                row_labels: None,
                col_labels: None,
                show_values: false,
                colormap: Colormap::default(),
            },
        }
    }

    /// Set data as row-major 2D array with dimensions
    pub fn data(mut self, rows: usize, cols: usize, values: Vec<f64>) -> Self {
        self.heatmap.dims = (cols, rows);
        self.heatmap.values = values;
        self
    }

    /// Set data from 2D Vec (row-major). The widest row sets the column
    /// count, so ragged rows fail the grid check when encoded.
    pub fn from_2d(mut self, data: Vec<Vec<f64>>) -> Self {
        let rows = data.len();
        let cols = data.iter().map(Vec::len).max().unwrap_or(0);
        self.heatmap.dims = (cols, rows);
        self.heatmap.values = data.into_iter().flatten().collect();
        self
    }

    pub fn vmin(mut self, v: f64) -> Self {
        self.heatmap.vmin = Some(v);
        self
    }

    pub fn vmax(mut self, v: f64) -> Self {
        self.heatmap.vmax = Some(v);
        self
    }

    pub fn row_labels(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.heatmap.row_labels = Some(labels.into_iter().map(|l| l.into()).collect());
        self
    }

    pub fn col_labels(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.heatmap.col_labels = Some(labels.into_iter().map(|l| l.into()).collect());
        self
    }

    pub fn show_values(mut self, show: bool) -> Self {
        self.heatmap.show_values = show;
        self
    }

    pub fn colormap(mut self, cm: Colormap) -> Self {
        self.heatmap.colormap = cm;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.heatmap.meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.heatmap.meta.description = Some(desc.into());
        self
    }
}

/* -------------------- CONTOUR BUILDER -------------------- */

pub struct ContourBuilder {
    contour: Contour,
}

impl ContourBuilder {
    fn new() -> Self {
        Self {
            contour: Contour {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                x: vec![],
                y: vec![],
                z: vec![],
                colormap: Colormap::default(),
                color_label: None,
                x_label: None,
                y_label: None,
            },
        }
    }

    /// `z[j][i]` is the value at `(x[i], y[j])`
    pub fn grid(mut self, x: Vec<f64>, y: Vec<f64>, z: Vec<Vec<f64>>) -> Self {
        self.contour.x = x;
        self.contour.y = y;
        self.contour.z = z;
        self
    }

    /// Sample `f(x, y)` over the grid spanned by the two axes
    pub fn from_fn(self, x: Vec<f64>, y: Vec<f64>, f: impl Fn(f64, f64) -> f64) -> Self {
        let z = y
            .iter()
            .map(|&yv| x.iter().map(|&xv| f(xv, yv)).collect())
            .collect();
        self.grid(x, y, z)
    }

    pub fn colormap(mut self, cm: Colormap) -> Self {
        self.contour.colormap = cm;
        self
    }

    /// Colour bar title
    pub fn color_label(mut self, label: impl Into<String>) -> Self {
        self.contour.color_label = Some(label.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.contour.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.contour.y_label = Some(label.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.contour.meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.contour.meta.description = Some(desc.into());
        self
    }
}

/* -------------------- RADIAL BUILDER -------------------- */

pub struct RadialBuilder {
    rad: Radial,
}

impl RadialBuilder {
    fn new() -> Self {
        Self {
            rad: Radial::Pie {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                slices: vec![],
            },
        }
    }

    pub fn pie(mut self, data: Vec<(impl Into<String>, f64)>) -> Self {
        let Radial::Pie { slices, .. } = &mut self.rad;
        *slices = data.into_iter().map(|(l, v)| (l.into(), v)).collect();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        let Radial::Pie { meta, .. } = &mut self.rad;
        meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        let Radial::Pie { meta, .. } = &mut self.rad;
        meta.description = Some(desc.into());
        self
    }
}

/* -------------------- CANDLESTICK BUILDER -------------------- */

pub struct CandlestickBuilder {
    candle: Candlestick,
}

impl CandlestickBuilder {
    fn new() -> Self {
        Self {
            candle: Candlestick {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                kind: CandleKind::default(),
                candles: vec![],
                up_color: Color::rgb(0.2, 0.8, 0.3),   // green
                down_color: Color::rgb(0.9, 0.2, 0.2), // red
                range_slider: true,
                x_label: None,
                y_label: None,
            },
        }
    }

    /// Add OHLC data as Vec<(x, open, high, low, close)>
    pub fn data<X: Into<Datum>>(mut self, candles: Vec<(X, f64, f64, f64, f64)>) -> Self {
        self.candle.candles = candles
            .into_iter()
            .map(|(x, o, h, l, c)| OHLC::new(x, o, h, l, c))
            .collect();
        self
    }

    /// Add OHLC data directly
    pub fn ohlc(mut self, candles: Vec<OHLC>) -> Self {
        self.candle.candles = candles;
        self
    }

    /// Candlestick bodies or OHLC ticks
    pub fn kind(mut self, kind: CandleKind) -> Self {
        self.candle.kind = kind;
        self
    }

    pub fn up_color(mut self, c: Color) -> Self {
        self.candle.up_color = c;
        self
    }

    pub fn down_color(mut self, c: Color) -> Self {
        self.candle.down_color = c;
        self
    }

    /// Show the range slider under the x axis (on by default)
    pub fn range_slider(mut self, show: bool) -> Self {
        self.candle.range_slider = show;
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.candle.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.candle.y_label = Some(label.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.candle.meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.candle.meta.description = Some(desc.into());
        self
    }
}

/* -------------------- GEO BUILDER -------------------- */

pub struct GeoBuilder {
    geo: Geo,
}

impl GeoBuilder {
    fn new() -> Self {
        Self {
            geo: Geo::Choropleth {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                locations: vec![],
                values: vec![],
                location_mode: LocationMode::default(),
                colormap: Colormap::default(),
                color_label: None,
            },
        }
    }

    fn meta_mut(&mut self) -> &mut PlotMeta {
        match &mut self.geo {
            Geo::Choropleth { meta, .. } | Geo::ScatterGeo { meta, .. } => meta,
        }
    }

    /// Colour whole regions by value
    pub fn choropleth(mut self, locations: Vec<impl Into<String>>, values: Vec<f64>) -> Self {
        let id = self.geo.id();
        let meta = self.geo.meta().clone();
        self.geo = Geo::Choropleth {
            id,
            meta,
            locations: locations.into_iter().map(Into::into).collect(),
            values,
            location_mode: LocationMode::default(),
            colormap: Colormap::default(),
            color_label: None,
        };
        self
    }

    /// How choropleth locations are matched against the base map
    pub fn location_mode(mut self, mode: LocationMode) -> Self {
        if let Geo::Choropleth { location_mode, .. } = &mut self.geo {
            *location_mode = mode;
        }
        self
    }

    pub fn colormap(mut self, cm: Colormap) -> Self {
        if let Geo::Choropleth { colormap, .. } = &mut self.geo {
            *colormap = cm;
        }
        self
    }

    pub fn color_label(mut self, label: impl Into<String>) -> Self {
        if let Geo::Choropleth { color_label, .. } = &mut self.geo {
            *color_label = Some(label.into());
        }
        self
    }

    /// Markers at latitude/longitude pairs
    pub fn scatter(mut self, lat: Vec<f64>, lon: Vec<f64>) -> Self {
        let id = self.geo.id();
        let meta = self.geo.meta().clone();
        self.geo = Geo::ScatterGeo {
            id,
            meta,
            lat,
            lon,
            text: None,
            style: Style::default().size(8.0),
        };
        self
    }

    /// Labels drawn next to scatter markers
    pub fn text(mut self, labels: Vec<impl Into<String>>) -> Self {
        if let Geo::ScatterGeo { text, .. } = &mut self.geo {
            *text = Some(labels.into_iter().map(Into::into).collect());
        }
        self
    }

    pub fn style(mut self, s: Style) -> Self {
        if let Geo::ScatterGeo { style, .. } = &mut self.geo {
            *style = s;
        }
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta_mut().title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.meta_mut().description = Some(desc.into());
        self
    }
}

/* -------------------- HIERARCHY BUILDER -------------------- */

pub struct HierarchyBuilder {
    tree: Hierarchy,
}

impl HierarchyBuilder {
    fn new() -> Self {
        Self {
            tree: Hierarchy {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                kind: HierarchyKind::default(),
                nodes: vec![],
                branch_values: BranchValues::default(),
            },
        }
    }

    fn nodes<L, P>(mut self, kind: HierarchyKind, nodes: Vec<(L, P, f64)>) -> Self
    where
        L: Into<String>,
        P: Into<String>,
    {
        self.tree.kind = kind;
        self.tree.nodes = nodes
            .into_iter()
            .map(|(label, parent, value)| HierarchyNode {
                label: label.into(),
                parent: parent.into(),
                value,
            })
            .collect();
        self
    }

    /// Rings of (label, parent, value) nodes; an empty parent marks a root
    pub fn sunburst<L, P>(self, nodes: Vec<(L, P, f64)>) -> Self
    where
        L: Into<String>,
        P: Into<String>,
    {
        self.nodes(HierarchyKind::Sunburst, nodes)
    }

    /// Nested rectangles of (label, parent, value) nodes
    pub fn treemap<L, P>(self, nodes: Vec<(L, P, f64)>) -> Self
    where
        L: Into<String>,
        P: Into<String>,
    {
        self.nodes(HierarchyKind::Treemap, nodes)
    }

    pub fn branch_values(mut self, bv: BranchValues) -> Self {
        self.tree.branch_values = bv;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.tree.meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.tree.meta.description = Some(desc.into());
        self
    }
}

/* -------------------- PARALLEL BUILDER -------------------- */

pub struct ParallelBuilder {
    parallel: Parallel,
}

impl ParallelBuilder {
    fn new() -> Self {
        Self {
            parallel: Parallel {
                id: PlotId::new(),
                meta: PlotMeta::default(),
                dimensions: vec![],
                color_by: None,
                colormap: Colormap::default(),
            },
        }
    }

    /// Append one vertical axis
    pub fn dimension(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.parallel.dimensions.push((label.into(), values));
        self
    }

    /// Colour lines by the values of dimension `index`
    pub fn color_by(mut self, index: usize) -> Self {
        self.parallel.color_by = Some(index);
        self
    }

    pub fn colormap(mut self, cm: Colormap) -> Self {
        self.parallel.colormap = cm;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.parallel.meta.title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.parallel.meta.description = Some(desc.into());
        self
    }
}
