//! Distribution plots: histogram, box plot, violin.
//!
//! Binning, quartiles and kernel densities are left to plotly.js; only the
//! raw samples are shipped.

use super::common::{Encoded, Theme, axis, base_layout};
use crate::Result;
use crate::core::{Distribution, Scale, Style};
use serde_json::{Value, json};

pub fn encode_distribution(dist: &Distribution, theme: &Theme) -> Result<Encoded> {
    let (data, x_label, y_label) = match dist {
        Distribution::Histogram {
            values,
            bins,
            style,
            x_label,
            y_label,
            ..
        } => (vec![histogram(values, *bins, style)], x_label, y_label),
        Distribution::BoxPlot {
            groups,
            style,
            x_label,
            y_label,
            ..
        } => {
            let data: Vec<Value> = groups
                .iter()
                .map(|(label, values)| {
                    json!({
                        "type": "box",
                        "name": label,
                        "y": values,
                        "marker": { "color": style.effective_color().to_css() },
                    })
                })
                .collect();
            (data, x_label, y_label)
        }
        Distribution::Violin {
            groups,
            show_box,
            style,
            x_label,
            y_label,
            ..
        } => {
            let data: Vec<Value> = groups
                .iter()
                .map(|(label, values)| {
                    json!({
                        "type": "violin",
                        "name": label,
                        "y": values,
                        "box": { "visible": show_box },
                        "line": { "color": style.effective_color().to_css() },
                    })
                })
                .collect();
            (data, x_label, y_label)
        }
    };

    let mut layout = base_layout(dist.meta(), theme);
    layout["xaxis"] = axis(x_label.as_deref(), Scale::Auto, theme);
    layout["yaxis"] = axis(y_label.as_deref(), Scale::Auto, theme);
    if data.len() > 1 {
        layout["showlegend"] = json!(false);
    }

    Ok(Encoded { data, layout })
}

fn histogram(values: &[f64], bins: Option<usize>, style: &Style) -> Value {
    let mut trace = json!({
        "type": "histogram",
        "x": values,
        "marker": { "color": style.effective_color().to_css() },
    });
    if let Some(bins) = bins {
        trace["nbinsx"] = json!(bins.max(1));
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlotMeta;
    use crate::render::PlotId;

    fn groups() -> Vec<(String, Vec<f64>)> {
        vec![
            ("A".to_string(), vec![10.0, 15.0, 14.0]),
            ("B".to_string(), vec![22.0, 24.0, 23.0]),
        ]
    }

    #[test]
    fn histogram_ships_raw_samples() {
        let dist = Distribution::Histogram {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            values: vec![1.0, 2.0, 2.0],
            bins: None,
            style: Style::default(),
            x_label: Some("Values".into()),
            y_label: None,
        };
        let encoded = encode_distribution(&dist, &Theme::default()).unwrap();
        assert_eq!(encoded.data[0]["type"], "histogram");
        assert_eq!(encoded.data[0]["x"], json!([1.0, 2.0, 2.0]));
        assert!(encoded.data[0].get("nbinsx").is_none());
        assert_eq!(encoded.layout["xaxis"]["title"]["text"], "Values");
    }

    #[test]
    fn histogram_bin_hint() {
        let trace = histogram(&[1.0], Some(0), &Style::default());
        assert_eq!(trace["nbinsx"], json!(1));
    }

    #[test]
    fn one_trace_per_group() {
        let dist = Distribution::BoxPlot {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            groups: groups(),
            style: Style::default(),
            x_label: None,
            y_label: None,
        };
        let encoded = encode_distribution(&dist, &Theme::default()).unwrap();
        assert_eq!(encoded.data.len(), 2);
        assert_eq!(encoded.data[1]["name"], "B");
        assert_eq!(encoded.data[1]["type"], "box");
        assert_eq!(encoded.layout["showlegend"], json!(false));
    }

    #[test]
    fn violin_box_toggle() {
        let dist = Distribution::Violin {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            groups: groups(),
            show_box: true,
            style: Style::default(),
            x_label: None,
            y_label: None,
        };
        let encoded = encode_distribution(&dist, &Theme::default()).unwrap();
        assert_eq!(encoded.data[0]["type"], "violin");
        assert_eq!(encoded.data[0]["box"]["visible"], json!(true));
    }
}
