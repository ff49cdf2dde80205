//! Multivariate charts: parallel coordinates.

use super::common::{Encoded, Theme, base_layout, check_len, colorbar, colorscale};
use crate::core::Parallel;
use crate::{ChartError, Result};
use error_stack::Report;
use serde_json::{Value, json};

pub fn encode_parallel(parallel: &Parallel, theme: &Theme) -> Result<Encoded> {
    let rows = parallel.dimensions.first().map_or(0, |(_, v)| v.len());
    for (_, values) in &parallel.dimensions {
        check_len("parallel dimension", rows, values.len())?;
    }

    let dimensions: Vec<Value> = parallel
        .dimensions
        .iter()
        .map(|(label, values)| json!({ "label": label, "values": values }))
        .collect();

    let mut trace = json!({
        "type": "parcoords",
        "dimensions": dimensions,
    });

    if let Some(index) = parallel.color_by {
        let Some((label, values)) = parallel.dimensions.get(index) else {
            return Err(Report::new(ChartError::OutOfRange {
                what: "parallel color dimension",
                index,
                len: parallel.dimensions.len(),
            }));
        };
        trace["line"] = json!({
            "color": values,
            "colorscale": colorscale(parallel.colormap),
            "showscale": true,
            "colorbar": colorbar(Some(label.as_str())),
        });
    }

    let mut layout = base_layout(&parallel.meta, theme);
    // axis labels sit above the plot area
    layout["margin"]["t"] = json!(90);

    Ok(Encoded {
        data: vec![trace],
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Colormap, PlotMeta};
    use crate::render::PlotId;

    fn parallel(color_by: Option<usize>) -> Parallel {
        Parallel {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            dimensions: vec![
                ("Feature1".into(), vec![1.0, 2.0, 3.0]),
                ("Feature2".into(), vec![4.0, 5.0, 6.0]),
            ],
            color_by,
            colormap: Colormap::Viridis,
        }
    }

    #[test]
    fn dimensions_and_colour() {
        let encoded = encode_parallel(&parallel(Some(0)), &Theme::default()).unwrap();
        let trace = &encoded.data[0];
        assert_eq!(trace["type"], "parcoords");
        assert_eq!(trace["dimensions"][1]["label"], "Feature2");
        assert_eq!(trace["line"]["color"], json!([1.0, 2.0, 3.0]));
        assert_eq!(trace["line"]["colorbar"]["title"]["text"], "Feature1");
    }

    #[test]
    fn uncoloured_lines_have_no_scale() {
        let encoded = encode_parallel(&parallel(None), &Theme::default()).unwrap();
        assert!(encoded.data[0].get("line").is_none());
    }

    #[test]
    fn shape_errors() {
        let err = encode_parallel(&parallel(Some(5)), &Theme::default()).unwrap_err();
        assert!(matches!(
            err.current_context(),
            ChartError::OutOfRange { index: 5, len: 2, .. }
        ));

        let mut p = parallel(None);
        p.dimensions[1].1.pop();
        assert!(encode_parallel(&p, &Theme::default()).is_err());
    }
}
