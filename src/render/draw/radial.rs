//! Radial charts: pie.

use super::common::{Encoded, Theme, base_layout};
use crate::Result;
use crate::core::Radial;
use serde_json::json;

pub fn encode_radial(radial: &Radial, theme: &Theme) -> Result<Encoded> {
    match radial {
        Radial::Pie { meta, slices, .. } => {
            let (labels, values): (Vec<&str>, Vec<f64>) =
                slices.iter().map(|(l, v)| (l.as_str(), *v)).unzip();
            Ok(Encoded {
                data: vec![json!({
                    "type": "pie",
                    "labels": labels,
                    "values": values,
                })],
                layout: base_layout(meta, theme),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlotMeta;
    use crate::render::PlotId;

    #[test]
    fn pie_splits_slices() {
        let pie = Radial::Pie {
            id: PlotId::new(),
            meta: PlotMeta::default(),
            slices: vec![("A".into(), 10.0), ("B".into(), 20.0)],
        };
        let encoded = encode_radial(&pie, &Theme::default()).unwrap();
        assert_eq!(encoded.data[0]["type"], "pie");
        assert_eq!(encoded.data[0]["labels"], json!(["A", "B"]));
        assert_eq!(encoded.data[0]["values"], json!([10.0, 20.0]));
        assert!(encoded.layout.get("xaxis").is_none());
    }
}
