//! Geographic charts: choropleth and scatter-on-map.
//!
//! Base maps and projections come from plotly.js' bundled topojson.

use super::common::{Encoded, Theme, base_layout, check_len, colorbar, colorscale};
use crate::Result;
use crate::core::{Geo, LocationMode};
use serde_json::json;

pub fn encode_geo(geo: &Geo, theme: &Theme) -> Result<Encoded> {
    let mut layout = base_layout(geo.meta(), theme);
    layout["geo"] = json!({
        "bgcolor": theme.background.to_css(),
        "showframe": false,
        "showcountries": true,
        "countrycolor": theme.grid.to_css(),
    });

    let trace = match geo {
        Geo::Choropleth {
            locations,
            values,
            location_mode,
            colormap,
            color_label,
            ..
        } => {
            check_len("choropleth values", locations.len(), values.len())?;
            if *location_mode == LocationMode::UsaStates {
                layout["geo"]["scope"] = json!("usa");
            }
            json!({
                "type": "choropleth",
                "locations": locations,
                "z": values,
                "locationmode": location_mode_name(*location_mode),
                "colorscale": colorscale(*colormap),
                "colorbar": colorbar(color_label.as_deref()),
            })
        }
        Geo::ScatterGeo {
            lat,
            lon,
            text,
            style,
            ..
        } => {
            check_len("scatter-geo longitudes", lat.len(), lon.len())?;
            let mut trace = json!({
                "type": "scattergeo",
                "lat": lat,
                "lon": lon,
                "mode": "markers",
                "marker": {
                    "color": style.effective_color().to_css(),
                    "size": style.size,
                },
            });
            if let Some(text) = text {
                check_len("scatter-geo labels", lat.len(), text.len())?;
                trace["text"] = json!(text);
                trace["mode"] = json!("markers+text");
                trace["textposition"] = json!("top center");
            }
            trace
        }
    };

    Ok(Encoded {
        data: vec![trace],
        layout,
    })
}

fn location_mode_name(mode: LocationMode) -> &'static str {
    match mode {
        LocationMode::Iso3 => "ISO-3",
        LocationMode::UsaStates => "USA-states",
        LocationMode::CountryNames => "country names",
    }
}
