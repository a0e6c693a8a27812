//! HTML surface
//!
//! Builds a self-contained HTML document: inline CSS, inline SVG charts and a
//! small script adding wheel zoom and drag pan to zoomable charts. The page
//! works offline and needs no external assets.

use crate::chart::svg::{escape, to_svg, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::chart::ChartArtifact;

use super::markdown;
use super::surface::{Surface, TextBlock};

/// Collects composed blocks into an HTML document
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    title: String,
    body: String,
    chart_width: u32,
    chart_height: u32,
    charts: usize,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl HtmlSurface {
    pub fn new(chart_width: u32, chart_height: u32) -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            chart_width,
            chart_height,
            charts: 0,
        }
    }

    /// Number of charts appended so far
    pub fn chart_count(&self) -> usize {
        self.charts
    }

    /// Wrap the collected body into a complete document
    pub fn finish(self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <main class="container">
{body}
    </main>
    <script>{js}</script>
</body>
</html>
"#,
            title = escape(&self.title),
            css = inline_css(),
            body = self.body,
            js = inline_javascript(),
        )
    }
}

impl Surface for HtmlSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn text(&mut self, block: TextBlock) {
        let html = match block {
            TextBlock::Title(text) => format!("<h1>{}</h1>", escape(&text)),
            TextBlock::Header(text) => format!("<h2>{}</h2>", escape(&text)),
            TextBlock::Subheader(text) => format!("<h3>{}</h3>", escape(&text)),
            TextBlock::Markdown(text) => {
                format!(r#"<div class="markdown">{}</div>"#, markdown::to_html(&text))
            }
            TextBlock::Info(text) => format!(r#"<div class="info">{}</div>"#, escape(&text)),
        };
        self.body.push_str("        ");
        self.body.push_str(&html);
        self.body.push('\n');
    }

    fn chart(&mut self, chart: &ChartArtifact) {
        self.body.push_str(r#"        <figure class="chart-frame">"#);
        self.body
            .push_str(&to_svg(chart, self.chart_width, self.chart_height));
        self.body.push_str("</figure>\n");
        self.charts += 1;
    }
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; font-family: "Source Sans Pro", -apple-system, "Segoe UI", Roboto, sans-serif; color: #262730; background: #FFFFFF; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem 3rem 4rem; }
h1 { font-size: 2.2rem; margin: 1rem 0; }
h2 { font-size: 1.7rem; margin: 2.5rem 0 1rem; padding-top: 1rem; border-top: 1px solid #E6E9EF; }
h3 { font-size: 1.3rem; margin: 1.5rem 0 0.75rem; }
.markdown p, .markdown li { line-height: 1.6; }
.info { background: #E7F3FE; color: #0B4F8A; border-radius: 0.5rem; padding: 1rem 1.25rem; margin: 0.75rem 0 1.5rem; line-height: 1.5; }
.chart-frame { margin: 0; }
.chart { display: block; max-width: 100%; height: auto; }
.chart[data-zoomable] { cursor: grab; }
.chart .mark:hover { opacity: 0.75; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
document.querySelectorAll('svg[data-zoomable]').forEach(function (svg) {
    var initial = svg.getAttribute('viewBox');
    var box = initial.split(' ').map(Number);
    var drag = null;
    function apply() { svg.setAttribute('viewBox', box.join(' ')); }
    function point(e) {
        var r = svg.getBoundingClientRect();
        return [box[0] + (e.clientX - r.left) / r.width * box[2], box[1] + (e.clientY - r.top) / r.height * box[3]];
    }
    svg.addEventListener('wheel', function (e) {
        e.preventDefault();
        var p = point(e), k = e.deltaY < 0 ? 0.9 : 1.1;
        box = [p[0] - (p[0] - box[0]) * k, p[1] - (p[1] - box[1]) * k, box[2] * k, box[3] * k];
        apply();
    }, { passive: false });
    svg.addEventListener('mousedown', function (e) { drag = point(e); });
    window.addEventListener('mouseup', function () { drag = null; });
    svg.addEventListener('mousemove', function (e) {
        if (!drag) return;
        var p = point(e);
        box[0] += drag[0] - p[0];
        box[1] += drag[1] - p[1];
        apply();
    });
    svg.addEventListener('dblclick', function () { box = initial.split(' ').map(Number); apply(); });
});
"#
}
