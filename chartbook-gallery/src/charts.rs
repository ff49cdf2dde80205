//! The chart gallery: one function per chart type, each building a
//! single-plot dashboard from a small fixed dataset.

use chartbook::prelude::*;
use rand::Rng;

/// A named gallery entry
pub struct ChartEntry {
    pub name: &'static str,
    pub build: fn() -> Dashboard,
}

macro_rules! catalog {
    ($($f:ident),* $(,)?) => {
        &[$(ChartEntry { name: stringify!($f), build: $f }),*]
    };
}

/// Every chart, in the order the gallery shows them
pub const CHARTS: &[ChartEntry] = catalog![
    line_chart,
    scatter_plot,
    bar_chart,
    pie_chart,
    histogram,
    box_plot,
    heatmap,
    bubble_chart,
    area_chart,
    contour_plot,
    three_d_surface_plot,
    candlestick_chart,
    ohlc_chart,
    violin_plot,
    choropleth_map,
    scatter_map,
    sunburst_chart,
    treemap_chart,
    parallel_coordinates_plot,
];

pub fn find(name: &str) -> Option<&'static ChartEntry> {
    CHARTS.iter().find(|c| c.name == name)
}

const YEARS: [i32; 5] = [2015, 2016, 2017, 2018, 2019];
const YEAR_VALUES: [f64; 5] = [10.0, 15.0, 13.0, 17.0, 14.0];

const CATEGORIES: [&str; 4] = ["A", "B", "C", "D"];
const CATEGORY_VALUES: [f64; 4] = [10.0, 20.0, 30.0, 40.0];

const DATES: [&str; 4] = ["2021-01-01", "2021-01-02", "2021-01-03", "2021-01-04"];
const OPEN: [f64; 4] = [100.0, 102.0, 103.0, 107.0];
const HIGH: [f64; 4] = [105.0, 106.0, 108.0, 110.0];
const LOW: [f64; 4] = [98.0, 100.0, 101.0, 104.0];
const CLOSE: [f64; 4] = [104.0, 105.0, 106.0, 109.0];

fn grouped_values() -> Vec<(&'static str, Vec<f64>)> {
    vec![("A", vec![10.0, 15.0, 14.0]), ("B", vec![22.0, 24.0, 23.0])]
}

fn price_series() -> Vec<OHLC> {
    (0..DATES.len())
        .map(|i| OHLC::new(DATES[i], OPEN[i], HIGH[i], LOW[i], CLOSE[i]))
        .collect()
}

fn hierarchy_nodes() -> Vec<(&'static str, &'static str, f64)> {
    vec![("A", "", 10.0), ("B", "A", 20.0), ("C", "A", 30.0)]
}

/// `n` evenly spaced samples from `start` to `end` inclusive
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let span = end - start;
            (0..n)
                .map(|i| start + span * i as f64 / (n - 1) as f64)
                .collect()
        }
    }
}

pub fn line_chart() -> Dashboard {
    dash()
        .add_2d(|p| {
            p.line(YEARS, YEAR_VALUES, Style::default())
                .title("Line Chart Example")
                .description(
                    "A line chart is ideal for visualizing data trends over time, with data \
                     points connected by straight lines.",
                )
                .x_label("Year")
                .y_label("Value")
        })
        .build()
}

pub fn scatter_plot() -> Dashboard {
    dash()
        .add_2d(|p| {
            p.scatter(
                [10, 20, 30, 40, 50],
                [15.0, 25.0, 35.0, 45.0, 55.0],
                Style::default().size(8.0),
            )
            .title("Scatter Plot Example")
            .description(
                "A scatter plot displays the relationship between two numerical variables using \
                 dots.",
            )
            .x_label("Variable1")
            .y_label("Variable2")
        })
        .build()
}

pub fn bar_chart() -> Dashboard {
    dash()
        .add_2d(|p| {
            p.bars(CATEGORIES, CATEGORY_VALUES, Style::default())
                .title("Bar Chart Example")
                .description(
                    "Bar charts are used to compare categorical data, with rectangular bars \
                     representing values.",
                )
                .x_label("Category")
                .y_label("Value")
        })
        .build()
}

pub fn pie_chart() -> Dashboard {
    dash()
        .add_radial(|r| {
            r.pie(CATEGORIES.into_iter().zip(CATEGORY_VALUES).collect::<Vec<_>>())
                .title("Pie Chart Example")
                .description("A pie chart divides data into slices to illustrate proportions.")
        })
        .build()
}

pub fn histogram() -> Dashboard {
    dash()
        .add_distribution(|d| {
            d.histogram(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0])
                .title("Histogram Example")
                .description(
                    "Histograms display the distribution of a dataset by grouping data into bins.",
                )
                .x_label("Values")
                .y_label("count")
        })
        .build()
}

pub fn box_plot() -> Dashboard {
    dash()
        .add_distribution(|d| {
            d.boxplot(grouped_values())
                .title("Box Plot Example")
                .description(
                    "Box plots summarize data distribution through their quartiles, highlighting \
                     outliers.",
                )
                .x_label("Category")
                .y_label("Value")
        })
        .build()
}

pub fn heatmap() -> Dashboard {
    let mut rng = rand::thread_rng();
    let data: Vec<Vec<f64>> = (0..5)
        .map(|_| (0..5).map(|_| rng.r#gen::<f64>()).collect())
        .collect();

    dash()
        .add_heatmap(|h| {
            h.from_2d(data)
                .colormap(Colormap::Viridis)
                .title("Heatmap Example")
                .description(
                    "Heatmaps display data intensity using varying colors in a grid layout.",
                )
        })
        .build()
}

pub fn bubble_chart() -> Dashboard {
    dash()
        .add_2d(|p| {
            p.bubble(
                [10, 20, 30, 40, 50],
                [15.0, 25.0, 35.0, 45.0, 55.0],
                [100.0, 200.0, 300.0, 400.0, 500.0],
                Style::default().opacity(0.7),
            )
            .title("Bubble Chart Example")
            .description(
                "Bubble charts extend scatter plots with a third dimension using bubble size.",
            )
            .x_label("X")
            .y_label("Y")
        })
        .build()
}

pub fn area_chart() -> Dashboard {
    dash()
        .add_2d(|p| {
            p.area(YEARS, YEAR_VALUES, Style::default())
                .title("Area Chart Example")
                .description("Area charts show quantitative data over time, emphasizing magnitude.")
                .x_label("Year")
                .y_label("Value")
        })
        .build()
}

pub fn contour_plot() -> Dashboard {
    let x = linspace(0.0, 10.0, 100);
    let y = linspace(0.0, 10.0, 100);

    dash()
        .add_contour(|c| {
            c.from_fn(x, y, |x, y| (x * y).sin())
                .colormap(Colormap::Viridis)
                .color_label("Value")
                .title("Contour Plot Example")
                .description(
                    "Contour plots display three-dimensional data in two dimensions with contour \
                     lines.",
                )
                .x_label("X")
                .y_label("Y")
        })
        .build()
}

pub fn three_d_surface_plot() -> Dashboard {
    let axis = linspace(-5.0, 5.0, 100);

    dash()
        .add_3d(|p| {
            p.surface_fn(&axis, &axis, |x, y| (x * x + y * y).sqrt().sin())
                .title("3D Surface Plot Example")
                .description(
                    "3D surface plots provide a three-dimensional representation of data, showing \
                     relationships in three dimensions.",
                )
                .x_label("X")
                .y_label("Y")
                .z_label("Z")
        })
        .build()
}

pub fn candlestick_chart() -> Dashboard {
    dash()
        .add_candlestick(|c| {
            c.ohlc(price_series())
                .title("Candlestick Chart Example")
                .description(
                    "Candlestick charts are used to visualize stock price movements over time, \
                     displaying the opening, closing, high, and low prices.",
                )
        })
        .build()
}

pub fn ohlc_chart() -> Dashboard {
    dash()
        .add_candlestick(|c| {
            c.ohlc(price_series())
                .kind(CandleKind::Ohlc)
                .title("OHLC (Open, High, Low, Close) Chart Example")
                .description(
                    "OHLC (Open, High, Low, Close) charts are used for visualizing financial data \
                     with four key values for each period.",
                )
        })
        .build()
}

pub fn violin_plot() -> Dashboard {
    dash()
        .add_distribution(|d| {
            d.violin(grouped_values())
                .title("Violin Plot Example")
                .description(
                    "Violin plots combine aspects of box plots and density plots to display data \
                     distribution.",
                )
                .x_label("Category")
                .y_label("Value")
        })
        .build()
}

pub fn choropleth_map() -> Dashboard {
    dash()
        .add_geo(|g| {
            g.choropleth(vec!["USA", "Canada", "Mexico"], vec![10.0, 20.0, 30.0])
                .location_mode(LocationMode::CountryNames)
                .color_label("Value")
                .title("Choropleth Map Example")
                .description(
                    "Choropleth maps visualize data geographically, with color shading to \
                     represent values.",
                )
        })
        .build()
}

pub fn scatter_map() -> Dashboard {
    dash()
        .add_geo(|g| {
            g.scatter(
                vec![34.0522, 40.7128, 41.8781],
                vec![-118.2437, -74.0060, -87.6298],
            )
            .text(vec!["Los Angeles", "New York", "Chicago"])
            .title("Scatter Map Example")
            .description("Scatter maps visualize geographical data with points plotted on a map.")
        })
        .build()
}

pub fn sunburst_chart() -> Dashboard {
    dash()
        .add_hierarchy(|h| {
            h.sunburst(hierarchy_nodes())
                .title("Sunburst Chart Example")
                .description("Sunburst charts visualize hierarchical data with a circular layout.")
        })
        .build()
}

pub fn treemap_chart() -> Dashboard {
    dash()
        .add_hierarchy(|h| {
            h.treemap(hierarchy_nodes())
                .title("Treemap Chart Example")
                .description(
                    "Treemaps display hierarchical data as nested rectangles, with size and color \
                     indicating values.",
                )
        })
        .build()
}

pub fn parallel_coordinates_plot() -> Dashboard {
    dash()
        .add_parallel(|p| {
            p.dimension("Feature1", vec![1.0, 2.0, 3.0])
                .dimension("Feature2", vec![4.0, 5.0, 6.0])
                .dimension("Feature3", vec![7.0, 8.0, 9.0])
                .color_by(0)
                .title("Parallel Coordinates Plot Example")
                .description(
                    "Parallel coordinates plots are used to visualize multivariate data by \
                     plotting variables on parallel axes.",
                )
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_plot(d: &Dashboard) -> &Plot {
        assert_eq!(d.plot_count(), 1);
        &d.plots[0]
    }

    #[test]
    fn catalog_is_in_gallery_order() {
        let names: Vec<&str> = CHARTS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 19);
        assert_eq!(names[0], "line_chart");
        assert_eq!(names[10], "three_d_surface_plot");
        assert_eq!(names[18], "parallel_coordinates_plot");
        assert!(find("ohlc_chart").is_some());
        assert!(find("radar_chart").is_none());
    }

    #[test]
    fn every_chart_encodes() {
        for entry in CHARTS {
            let d = (entry.build)();
            let plot = only_plot(&d);
            assert!(plot.meta().title.is_some(), "{} has no title", entry.name);
            assert!(plot.meta().description.is_some());
            let fig = encode_plot(plot, &Theme::default())
                .unwrap_or_else(|e| panic!("{} failed to encode: {e:?}", entry.name));
            assert!(!fig.data.is_empty(), "{} has no traces", entry.name);
        }
    }

    #[test]
    fn chart_kinds() {
        let expected = [
            PlotKind::Line,
            PlotKind::Scatter,
            PlotKind::Bar,
            PlotKind::Pie,
            PlotKind::Histogram,
            PlotKind::Box,
            PlotKind::Heatmap,
            PlotKind::Bubble,
            PlotKind::Area,
            PlotKind::Contour,
            PlotKind::Surface,
            PlotKind::Candlestick,
            PlotKind::Ohlc,
            PlotKind::Violin,
            PlotKind::Choropleth,
            PlotKind::ScatterGeo,
            PlotKind::Sunburst,
            PlotKind::Treemap,
            PlotKind::Parallel,
        ];
        for (entry, kind) in CHARTS.iter().zip(expected) {
            assert_eq!(only_plot(&(entry.build)()).kind(), kind, "{}", entry.name);
        }
    }

    #[test]
    fn heatmap_values_are_unit_interval() {
        let Plot::Heatmap(h) = only_plot(&heatmap()).clone() else {
            panic!("expected a heatmap");
        };
        assert_eq!(h.dims, (5, 5));
        assert!(h.values.iter().all(|v| (0.0..1.0).contains(v)));
        assert_eq!(h.colormap, Colormap::Viridis);
    }

    #[test]
    fn contour_grid_is_sin_of_product() {
        let Plot::Contour(c) = only_plot(&contour_plot()).clone() else {
            panic!("expected a contour");
        };
        assert_eq!(c.x.len(), 100);
        assert_eq!(c.z.len(), 100);
        assert_eq!(c.x[99], 10.0);
        assert_eq!(c.z[99][99], (100.0f64).sin());
        assert_eq!(c.color_label.as_deref(), Some("Value"));
    }

    #[test]
    fn hierarchy_roots_under_a() {
        let fig = encode_plot(only_plot(&sunburst_chart()), &Theme::default()).unwrap();
        assert_eq!(fig.data[0]["parents"], serde_json::json!(["", "A", "A"]));
    }

    #[test]
    fn linspace_hits_both_ends() {
        let xs = linspace(-5.0, 5.0, 11);
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[5], 0.0);
        assert_eq!(xs[10], 5.0);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }
}
