//! Page assembly: encoded figures embedded in a self-contained HTML page
//! that loads plotly.js from its CDN.

use error_stack::ResultExt;
use serde::Serialize;

use super::{Section, Theme, encode_sections};
use crate::core::Dashboard;
use crate::{ChartError, Result};

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PLOT_HEIGHT_PX: u32 = 480;

const STYLE: &str = r#"
body { margin: 0; padding: 16px 24px; background: var(--bg); color: var(--fg);
       font-family: system-ui, -apple-system, "Segoe UI", sans-serif; }
h1 { font-size: 1.4em; font-weight: 600; margin: 0 0 12px; }
.tabs { display: flex; flex-wrap: wrap; gap: 4px; margin-bottom: 12px; }
.tabs button { background: none; color: inherit; border: 1px solid var(--grid);
               border-radius: 4px; padding: 4px 10px; cursor: pointer; opacity: .7; }
.tabs button.active { opacity: 1; border-color: var(--fg); }
.grid { display: grid; gap: 16px; }
figure { margin: 0; min-width: 0; }
figcaption { font-size: .9em; opacity: .75; margin-top: 4px; }
"#;

const SCRIPT: &str = r#"
const CONFIG = { responsive: true, displaylogo: false };
const drawn = new Set();
function draw(index) {
  const figures = SECTIONS[index].figures;
  if (drawn.has(index)) {
    figures.forEach(f => Plotly.Plots.resize('plot-' + f.id));
    return;
  }
  drawn.add(index);
  figures.forEach(f => Plotly.newPlot('plot-' + f.id, f.data, f.layout, CONFIG));
}
function showTab(index) {
  document.querySelectorAll('section.grid').forEach((el, i) => { el.hidden = i !== index; });
  document.querySelectorAll('.tabs button').forEach((el, i) => el.classList.toggle('active', i === index));
  draw(index);
}
showTab(ACTIVE);
"#;

/// Render the dashboard as a standalone HTML page
pub fn render_page(dashboard: &Dashboard) -> Result<String> {
    let theme = Theme::from_background(dashboard.background);
    let sections = encode_sections(dashboard)?;
    let active = dashboard.active_tab.min(sections.len().saturating_sub(1));
    let title = dashboard.title.as_deref().unwrap_or("chartbook");

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(&format!(
        "<script src=\"{PLOTLY_CDN}\" charset=\"utf-8\"></script>\n"
    ));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n"));
    html.push_str(&format!(
        "<body style=\"--bg: {}; --fg: {}; --grid: {};\">\n",
        theme.background.to_css(),
        theme.foreground.to_css(),
        theme.grid.to_css()
    ));

    if let Some(title) = &dashboard.title {
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    }

    if dashboard.has_tabs() {
        html.push_str("<nav class=\"tabs\">\n");
        for (i, section) in sections.iter().enumerate() {
            html.push_str(&format!(
                "<button type=\"button\" onclick=\"showTab({i})\">{}</button>\n",
                escape_html(section.name.as_deref().unwrap_or_default())
            ));
        }
        html.push_str("</nav>\n");
    }

    for section in &sections {
        push_section(&mut html, section);
    }

    html.push_str(&format!(
        "<script>\nconst SECTIONS = {};\nconst ACTIVE = {active};\n{SCRIPT}</script>\n",
        embed_json(&sections)?
    ));
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

/// The encoded figures as pretty-printed JSON
pub fn render_json(dashboard: &Dashboard) -> Result<String> {
    #[derive(Serialize)]
    struct Page<'a> {
        title: Option<&'a str>,
        sections: Vec<Section>,
    }

    let page = Page {
        title: dashboard.title.as_deref(),
        sections: encode_sections(dashboard)?,
    };
    serde_json::to_string_pretty(&page).change_context(ChartError::Encode)
}

fn push_section(html: &mut String, section: &Section) {
    html.push_str(&format!(
        "<section class=\"grid\" style=\"grid-template-columns: repeat({}, minmax(0, 1fr));\" hidden>\n",
        section.columns.max(1)
    ));
    for fig in &section.figures {
        html.push_str("<figure>\n");
        html.push_str(&format!(
            "<div id=\"{}\" style=\"height: {PLOT_HEIGHT_PX}px;\"></div>\n",
            fig.id.dom_id()
        ));
        if let Some(desc) = &fig.description {
            html.push_str(&format!("<figcaption>{}</figcaption>\n", escape_html(desc)));
        }
        html.push_str("</figure>\n");
    }
    html.push_str("</section>\n");
}

/// JSON safe to inline in a `<script>` block
fn embed_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).change_context(ChartError::Encode)?;
    Ok(json.replace("</", "<\\/").replace("<!--", "<\\u0021--"))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Plot, PlotMeta, Radial, Tab};
    use crate::render::PlotId;

    fn pie(title: &str) -> Plot {
        Plot::Radial(Radial::Pie {
            id: PlotId::new(),
            meta: PlotMeta {
                title: Some(title.into()),
                description: Some("Slices & <proportions>".into()),
            },
            slices: vec![("A".into(), 1.0), ("B".into(), 2.0)],
        })
    }

    #[test]
    fn page_embeds_cdn_and_figures() {
        let plot = pie("Pie Chart Example");
        let dom_id = plot.id().dom_id();
        let mut dashboard = Dashboard::default();
        dashboard.title = Some("Gallery".into());
        dashboard.plots.push(plot);

        let html = render_page(&dashboard).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains(&format!("id=\"{dom_id}\"")));
        assert!(html.contains("<h1>Gallery</h1>"));
        assert!(html.contains("Slices &amp; &lt;proportions&gt;"));
        assert!(html.contains("\"type\":\"pie\""));
        assert!(!html.contains("class=\"tabs\""));
    }

    #[test]
    fn tabs_get_buttons() {
        let mut dashboard = Dashboard::default();
        for name in ["one", "two"] {
            let mut tab = Tab::new(name);
            tab.plots.push(pie(name));
            dashboard.tabs.push(tab);
        }
        dashboard.active_tab = 9;

        let html = render_page(&dashboard).unwrap();
        assert!(html.contains("onclick=\"showTab(1)\">two</button>"));
        assert!(html.contains("const ACTIVE = 1;"));
    }

    #[test]
    fn script_close_tag_cannot_escape_json() {
        let json =
            embed_json(&serde_json::json!({ "title": "</script><script>alert(1)" })).unwrap();
        assert!(!json.contains("</script>"));
        let back: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back["title"], "</script><script>alert(1)");
    }

    #[test]
    fn empty_dashboard_is_an_error() {
        let err = render_page(&Dashboard::default()).unwrap_err();
        assert!(matches!(err.current_context(), ChartError::EmptyDashboard));
        assert!(render_json(&Dashboard::default()).is_err());
    }

    #[test]
    fn direct_plots_with_empty_tab_fail_instead_of_blank_page() {
        let mut dashboard = Dashboard::default();
        dashboard.plots.push(pie("direct"));
        dashboard.tabs.push(Tab::new("empty"));

        let err = render_page(&dashboard).unwrap_err();
        assert!(matches!(
            err.current_context(),
            ChartError::MixedLayout { direct: 1 }
        ));
        assert!(render_json(&dashboard).is_err());
    }

    #[test]
    fn json_output_parses() {
        let mut dashboard = Dashboard::default();
        dashboard.plots.push(pie("p"));
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&dashboard).unwrap()).unwrap();
        assert_eq!(json["sections"][0]["figures"][0]["kind"], "pie");
        assert_eq!(json["sections"][0]["columns"], 1);
        assert!(json["title"].is_null());
    }
}
