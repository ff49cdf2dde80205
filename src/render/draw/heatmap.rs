//! Grid-based colour fields: heatmaps and contour plots.

use super::common::{
    Encoded, Theme, axis, base_layout, check_grid, check_len, colorbar, colorscale,
};
use crate::Result;
use crate::core::{Contour, Heatmap, Scale};
use serde_json::json;

pub fn encode_heatmap(heatmap: &Heatmap, theme: &Theme) -> Result<Encoded> {
    let (cols, rows) = heatmap.dims;
    check_grid("heatmap cells", rows, cols, heatmap.values.len())?;

    let z: Vec<&[f64]> = if cols == 0 {
        vec![]
    } else {
        heatmap.values.chunks(cols).collect()
    };

    let mut trace = json!({
        "type": "heatmap",
        "z": z,
        "colorscale": colorscale(heatmap.colormap),
    });
    if let Some(labels) = &heatmap.col_labels {
        check_len("heatmap column labels", cols, labels.len())?;
        trace["x"] = json!(labels);
    }
    if let Some(labels) = &heatmap.row_labels {
        check_len("heatmap row labels", rows, labels.len())?;
        trace["y"] = json!(labels);
    }
    if let Some(v) = heatmap.vmin {
        trace["zmin"] = json!(v);
    }
    if let Some(v) = heatmap.vmax {
        trace["zmax"] = json!(v);
    }
    if heatmap.show_values {
        trace["texttemplate"] = json!("%{z:.2f}");
    }

    let mut layout = base_layout(&heatmap.meta, theme);
    layout["xaxis"] = axis(None, Scale::Auto, theme);
    layout["yaxis"] = axis(None, Scale::Auto, theme);
    // matrix orientation: row 0 on top
    layout["yaxis"]["autorange"] = json!("reversed");

    Ok(Encoded {
        data: vec![trace],
        layout,
    })
}

pub fn encode_contour(contour: &Contour, theme: &Theme) -> Result<Encoded> {
    check_len("contour rows", contour.y.len(), contour.z.len())?;
    for row in &contour.z {
        check_len("contour row", contour.x.len(), row.len())?;
    }

    let trace = json!({
        "type": "contour",
        "x": contour.x,
        "y": contour.y,
        "z": contour.z,
        "colorscale": colorscale(contour.colormap),
        "colorbar": colorbar(contour.color_label.as_deref()),
    });

    let mut layout = base_layout(&contour.meta, theme);
    layout["xaxis"] = axis(contour.x_label.as_deref(), Scale::Auto, theme);
    layout["yaxis"] = axis(contour.y_label.as_deref(), Scale::Auto, theme);

    Ok(Encoded {
        data: vec![trace],
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartError;
    use crate::core::{Colormap, PlotMeta};
    use crate::render::PlotId;

    fn heatmap(rows: usize, cols: usize) -> Heatmap {
        Heatmap {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            dims: (cols, rows),
            values: (0..rows * cols).map(|v| v as f64).collect(),
            vmin: None,
            vmax: None,
            row_labels: None,
            col_labels: None,
            show_values: false,
            colormap: Colormap::Viridis,
        }
    }

    #[test]
    fn heatmap_rows_are_chunked() {
        let encoded = encode_heatmap(&heatmap(2, 3), &Theme::default()).unwrap();
        let trace = &encoded.data[0];
        assert_eq!(trace["type"], "heatmap");
        assert_eq!(trace["z"], json!([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]));
        assert_eq!(trace["colorscale"], "Viridis");
        assert_eq!(encoded.layout["yaxis"]["autorange"], "reversed");
    }

    #[test]
    fn heatmap_options_are_forwarded() {
        let mut h = heatmap(1, 2);
        h.vmin = Some(-1.0);
        h.vmax = Some(1.0);
        h.show_values = true;
        h.col_labels = Some(vec!["a".into(), "b".into()]);
        let trace = &encode_heatmap(&h, &Theme::default()).unwrap().data[0];
        assert_eq!(trace["zmin"], json!(-1.0));
        assert_eq!(trace["zmax"], json!(1.0));
        assert_eq!(trace["x"], json!(["a", "b"]));
        assert!(trace["texttemplate"].is_string());
    }

    #[test]
    fn heatmap_shape_errors() {
        let mut h = heatmap(2, 2);
        h.values.pop();
        assert!(matches!(
            encode_heatmap(&h, &Theme::default()).unwrap_err().current_context(),
            ChartError::GridMismatch { .. }
        ));

        let mut h = heatmap(2, 2);
        h.row_labels = Some(vec!["only one".into()]);
        assert!(encode_heatmap(&h, &Theme::default()).is_err());
    }

    #[test]
    fn empty_heatmap_encodes() {
        let encoded = encode_heatmap(&heatmap(0, 0), &Theme::default()).unwrap();
        assert_eq!(encoded.data[0]["z"], json!([]));
    }

    #[test]
    fn contour_checks_grid() {
        let mut contour = Contour {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            x: vec![0.0, 1.0],
            y: vec![0.0, 1.0, 2.0],
            z: vec![vec![0.0; 2]; 3],
            colormap: Colormap::Viridis,
            color_label: Some("Value".into()),
            x_label: Some("X".into()),
            y_label: Some("Y".into()),
        };
        let encoded = encode_contour(&contour, &Theme::default()).unwrap();
        assert_eq!(encoded.data[0]["type"], "contour");
        assert_eq!(encoded.data[0]["colorbar"]["title"]["text"], "Value");
        assert_eq!(encoded.layout["yaxis"]["title"]["text"], "Y");

        contour.z[1].push(9.0);
        assert!(encode_contour(&contour, &Theme::default()).is_err());
        contour.z.pop();
        assert!(encode_contour(&contour, &Theme::default()).is_err());
    }
}
