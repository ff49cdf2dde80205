//! 2D cartesian plots: line, scatter, bubble, area, bars.

use super::common::{Encoded, Theme, axis, base_layout, check_len};
use crate::Result;
use crate::core::{Geometry2D, Graph2D, Layer2D};
use serde_json::{Value, json};

/// Largest rendered bubble diameter in pixels.
const BUBBLE_MAX_PX: f64 = 20.0;

pub fn encode_2d(graph: &Graph2D, theme: &Theme) -> Result<Encoded> {
    let data = graph
        .layers
        .iter()
        .map(encode_layer)
        .collect::<Result<Vec<_>>>()?;

    let mut layout = base_layout(&graph.meta, theme);
    layout["xaxis"] = axis(graph.x_label.as_deref(), graph.x_scale, theme);
    layout["yaxis"] = axis(graph.y_label.as_deref(), graph.y_scale, theme);

    Ok(Encoded { data, layout })
}

fn encode_layer(layer: &Layer2D) -> Result<Value> {
    check_len("2d layer y values", layer.x.len(), layer.y.len())?;

    let color = layer.style.effective_color();
    let mut trace = match layer.geometry {
        Geometry2D::Line => json!({
            "type": "scatter",
            "mode": "lines",
            "line": { "color": color.to_css(), "width": layer.style.size },
        }),
        Geometry2D::Area => json!({
            "type": "scatter",
            "mode": "lines",
            "fill": "tozeroy",
            "fillcolor": color.with_a(color.a * 0.5).to_css(),
            "line": { "color": color.to_css(), "width": layer.style.size },
        }),
        Geometry2D::Points => json!({
            "type": "scatter",
            "mode": "markers",
            "marker": { "color": color.to_css(), "size": layer.style.size },
        }),
        Geometry2D::Bars => json!({
            "type": "bar",
            "marker": { "color": color.to_css() },
        }),
    };

    if let Some(sizes) = &layer.sizes {
        check_len("bubble sizes", layer.x.len(), sizes.len())?;
        let max = sizes.iter().cloned().fold(0.0_f64, f64::max);
        trace["marker"]["size"] = json!(sizes);
        trace["marker"]["sizemode"] = json!("area");
        if max > 0.0 {
            trace["marker"]["sizeref"] = json!(2.0 * max / (BUBBLE_MAX_PX * BUBBLE_MAX_PX));
        }
    }

    trace["x"] = json!(layer.x);
    trace["y"] = json!(layer.y);
    if let Some(name) = &layer.name {
        trace["name"] = json!(name);
    }
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartError;
    use crate::core::Datum;

    fn layer(geometry: Geometry2D) -> Layer2D {
        Layer2D::new(
            geometry,
            vec![Datum::from("A"), Datum::from("B")],
            vec![1.0, 2.0],
        )
    }

    #[test]
    fn line_and_area_are_scatter_traces() {
        let line = encode_layer(&layer(Geometry2D::Line)).unwrap();
        assert_eq!(line["type"], "scatter");
        assert_eq!(line["mode"], "lines");
        assert!(line.get("fill").is_none());

        let area = encode_layer(&layer(Geometry2D::Area)).unwrap();
        assert_eq!(area["fill"], "tozeroy");
        assert_eq!(area["x"], json!(["A", "B"]));
    }

    #[test]
    fn bubble_sizes_scale_by_area() {
        let mut bubble = layer(Geometry2D::Points);
        bubble.sizes = Some(vec![100.0, 400.0]);
        let trace = encode_layer(&bubble).unwrap();
        assert_eq!(trace["mode"], "markers");
        assert_eq!(trace["marker"]["sizemode"], "area");
        assert_eq!(trace["marker"]["sizeref"], json!(2.0));
        assert_eq!(trace["marker"]["size"], json!([100.0, 400.0]));
    }

    #[test]
    fn mismatched_layer_is_rejected() {
        let mut bad = layer(Geometry2D::Bars);
        bad.y.push(3.0);
        let err = encode_layer(&bad).unwrap_err();
        assert!(matches!(
            err.current_context(),
            ChartError::LengthMismatch { found: 3, .. }
        ));

        let mut bubble = layer(Geometry2D::Points);
        bubble.sizes = Some(vec![1.0]);
        assert!(encode_layer(&bubble).is_err());
    }

    #[test]
    fn graph_layout_carries_axis_titles() {
        let mut graph = Graph2D::new().with_layer(layer(Geometry2D::Bars));
        graph.x_label = Some("Category".into());
        graph.y_label = Some("Value".into());
        let encoded = encode_2d(&graph, &Theme::default()).unwrap();
        assert_eq!(encoded.data.len(), 1);
        assert_eq!(encoded.data[0]["type"], "bar");
        assert_eq!(encoded.layout["xaxis"]["title"]["text"], "Category");
        assert_eq!(encoded.layout["yaxis"]["title"]["text"], "Value");
    }
}
