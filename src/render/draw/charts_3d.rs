//! 3D surface plots.

use super::common::{Encoded, Theme, base_layout, check_grid, colorscale};
use crate::Result;
use crate::core::{Graph3D, Layer3D};
use serde_json::{Value, json};

pub fn encode_3d(graph: &Graph3D, theme: &Theme) -> Result<Encoded> {
    let data = graph
        .layers
        .iter()
        .map(encode_surface)
        .collect::<Result<Vec<_>>>()?;

    let scene_axis = |label: Option<&str>| {
        let mut axis = json!({
            "gridcolor": theme.grid.to_css(),
            "backgroundcolor": theme.background.to_css(),
        });
        if let Some(label) = label {
            axis["title"] = json!({ "text": label });
        }
        axis
    };

    let mut layout = base_layout(&graph.meta, theme);
    layout["scene"] = json!({
        "xaxis": scene_axis(graph.x_label.as_deref()),
        "yaxis": scene_axis(graph.y_label.as_deref()),
        "zaxis": scene_axis(graph.z_label.as_deref()),
    });

    Ok(Encoded { data, layout })
}

fn encode_surface(layer: &Layer3D) -> Result<Value> {
    let (nx, ny) = (layer.nx as usize, layer.ny as usize);
    check_grid("surface points", ny, nx, layer.xyz.len())?;

    // plotly wants one row per y sample
    let component = |c: usize| -> Vec<Vec<f64>> {
        if nx == 0 {
            return vec![];
        }
        layer
            .xyz
            .chunks(nx)
            .map(|row| row.iter().map(|p| p[c]).collect())
            .collect()
    };

    Ok(json!({
        "type": "surface",
        "x": component(0),
        "y": component(1),
        "z": component(2),
        "colorscale": colorscale(layer.colormap),
        "opacity": layer.opacity,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartError;
    use crate::core::Colormap;

    fn grid(nx: u32, ny: u32) -> Layer3D {
        let mut xyz = vec![];
        for j in 0..ny {
            for i in 0..nx {
                xyz.push([i as f64, j as f64, (i * 10 + j) as f64]);
            }
        }
        Layer3D {
            nx,
            ny,
            xyz,
            colormap: Colormap::Viridis,
            opacity: 1.0,
        }
    }

    #[test]
    fn surface_rows_follow_y() {
        let trace = encode_surface(&grid(3, 2)).unwrap();
        assert_eq!(trace["type"], "surface");
        assert_eq!(trace["z"], json!([[0.0, 10.0, 20.0], [1.0, 11.0, 21.0]]));
        assert_eq!(trace["x"][1], json!([0.0, 1.0, 2.0]));
        assert_eq!(trace["y"][1], json!([1.0, 1.0, 1.0]));
    }

    #[test]
    fn short_surface_is_rejected() {
        let mut layer = grid(3, 2);
        layer.xyz.pop();
        let err = encode_surface(&layer).unwrap_err();
        assert!(matches!(
            err.current_context(),
            ChartError::GridMismatch {
                rows: 2,
                cols: 3,
                found: 5,
                ..
            }
        ));
    }

    #[test]
    fn scene_axes_are_titled() {
        let mut graph = Graph3D::new();
        graph.layers.push(grid(2, 2));
        graph.x_label = Some("X".into());
        graph.z_label = Some("Z".into());
        let encoded = encode_3d(&graph, &Theme::default()).unwrap();
        assert_eq!(encoded.layout["scene"]["xaxis"]["title"]["text"], "X");
        assert!(encoded.layout["scene"]["yaxis"].get("title").is_none());
        assert_eq!(encoded.layout["scene"]["zaxis"]["title"]["text"], "Z");
    }
}
