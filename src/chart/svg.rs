//! SVG output for chart artifacts
//!
//! Produces a standalone `<svg>` element. Every mark is drawn with
//! `class="mark"` and carries a `<title>` child holding its tooltip, which
//! browsers show on hover. Bar and scatter charts are tagged `data-zoomable`
//! so the page script can attach pan/zoom.

use std::f64::consts::PI;

use crate::datasets::format_value;

use super::artifact::{ChartArtifact, ColorScale, Geometry, Mark};

pub const DEFAULT_WIDTH: u32 = 960;
pub const DEFAULT_HEIGHT: u32 = 480;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 110.0;
const LEGEND_WIDTH: f64 = 220.0;
const TICK_COUNT: usize = 5;
const AXIS_COLOR: &str = "#444";
const GRID_COLOR: &str = "#E5ECF6";

/// Escape text for inclusion in HTML or SVG markup
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Evenly spaced, rounded tick values covering `[min, max]`
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (min, max) = if max > min { (min, max) } else { (min, min + 1.0) };
    let raw = (max - min) / count.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = match raw / magnitude {
        n if n <= 1.0 => 1.0,
        n if n <= 2.0 => 2.0,
        n if n <= 5.0 => 5.0,
        _ => 10.0,
    } * magnitude;

    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;
    let steps = ((end - start) / step).round() as usize;

    (0..=steps)
        .map(|i| ((start + i as f64 * step) * 1e9).round() / 1e9)
        .collect()
}

/// Plot area inside the SVG canvas
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Linear mapping from a data domain onto a pixel range
#[derive(Debug, Clone, Copy)]
struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    fn map(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        let t = if span == 0.0 { 0.5 } else { (v - self.domain.0) / span };
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Render a chart artifact as SVG markup
pub fn to_svg(chart: &ChartArtifact, width: u32, height: u32) -> String {
    let (w, h) = (width as f64, height as f64);
    let has_legend = !chart.legend.is_empty()
        || matches!(chart.color_scale, Some(ColorScale::Continuous { .. }));
    let legend_width = if has_legend { LEGEND_WIDTH } else { 0.0 };

    let frame = Frame {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: (w - MARGIN_LEFT - MARGIN_RIGHT - legend_width).max(1.0),
        height: (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
    };

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="chart-{id}" class="chart chart-{kind}" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{title}"{zoom}>"#,
        id = escape(&chart.id),
        kind = chart.kind,
        title = escape(&chart.title),
        zoom = if chart.kind.is_zoomable() {
            r#" data-zoomable="true""#
        } else {
            ""
        },
    );
    out.push_str(&format!(
        r##"<rect width="{w}" height="{h}" fill="#FFFFFF"/><text class="chart-title" x="{x}" y="30" font-size="18" fill="#2A3F5F">{title}</text>"##,
        x = frame.left,
        title = escape(&chart.title),
    ));

    if chart.kind.is_bar() {
        draw_bars(&mut out, chart, frame);
    } else if chart.kind.is_scatter() {
        draw_scatter(&mut out, chart, frame);
    } else {
        draw_pie(&mut out, chart, frame);
    }

    if has_legend {
        draw_legend(&mut out, chart, frame);
    }

    out.push_str("</svg>");
    out
}

fn mark_open(mark: &Mark) -> String {
    format!(
        r#"class="mark" data-category="{category}" data-value="{value}" fill="{color}""#,
        category = escape(&mark.category),
        value = format_value(mark.value),
        color = mark.color,
    )
}

fn tooltip_element(mark: &Mark) -> String {
    format!("<title>{}</title>", escape(&mark.tooltip))
}

fn draw_y_axis(out: &mut String, frame: Frame, scale: Scale, ticks: &[f64], title: &str) {
    for &tick in ticks {
        let y = scale.map(tick);
        out.push_str(&format!(
            r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{GRID_COLOR}"/><text x="{tx}" y="{ty}" font-size="11" text-anchor="end" fill="{AXIS_COLOR}">{label}</text>"#,
            x1 = frame.left,
            x2 = frame.right(),
            tx = frame.left - 8.0,
            ty = y + 4.0,
            label = format_value(tick),
        ));
    }
    out.push_str(&format!(
        r#"<text class="axis-title" x="18" y="{y}" font-size="12" text-anchor="middle" fill="{AXIS_COLOR}" transform="rotate(-90 18 {y})">{title}</text>"#,
        y = frame.top + frame.height / 2.0,
        title = escape(title),
    ));
}

fn draw_x_title(out: &mut String, frame: Frame, title: &str, y: f64) {
    out.push_str(&format!(
        r#"<text class="axis-title" x="{x}" y="{y}" font-size="12" text-anchor="middle" fill="{AXIS_COLOR}">{title}</text>"#,
        x = frame.left + frame.width / 2.0,
        title = escape(title),
    ));
}

fn draw_bars(out: &mut String, chart: &ChartArtifact, frame: Frame) {
    let y_max = chart.y_axis.as_ref().map(|a| a.max).unwrap_or(0.0);
    let ticks = nice_ticks(0.0, y_max, TICK_COUNT);
    let top = ticks.last().copied().unwrap_or(1.0);
    let y = Scale {
        domain: (0.0, top),
        range: (frame.bottom(), frame.top),
    };

    draw_y_axis(
        out,
        frame,
        y,
        &ticks,
        chart.y_axis.as_ref().map(|a| a.title.as_str()).unwrap_or(""),
    );

    let slots = chart.categories.len().max(1) as f64;
    let slot_width = frame.width / slots;

    out.push_str(r#"<g class="plot">"#);
    for mark in &chart.marks {
        if let Geometry::Bar {
            slot,
            group,
            group_count,
            base,
            height,
        } = mark.geometry
        {
            let bar_width = slot_width * 0.8 / group_count.max(1) as f64;
            let x = frame.left + slot as f64 * slot_width + slot_width * 0.1 + group as f64 * bar_width;
            let y_top = y.map(base + height);
            out.push_str(&format!(
                r#"<rect {attrs} x="{x:.2}" y="{y_top:.2}" width="{bw:.2}" height="{bh:.2}">{title}</rect>"#,
                attrs = mark_open(mark),
                bw = bar_width,
                bh = (y.map(base) - y_top).max(0.0),
                title = tooltip_element(mark),
            ));
        }
    }
    out.push_str("</g>");

    let rotate = chart.categories.iter().any(|c| c.chars().count() > 12);
    for (slot, category) in chart.categories.iter().enumerate() {
        let cx = frame.left + (slot as f64 + 0.5) * slot_width;
        let cy = frame.bottom() + 16.0;
        let transform = if rotate {
            format!(r#" text-anchor="end" transform="rotate(-30 {cx:.2} {cy})""#)
        } else {
            r#" text-anchor="middle""#.to_string()
        };
        out.push_str(&format!(
            r#"<text class="tick" x="{cx:.2}" y="{cy}" font-size="11" fill="{AXIS_COLOR}"{transform}>{label}</text>"#,
            label = escape(category),
        ));
    }

    out.push_str(&format!(
        r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{AXIS_COLOR}"/>"#,
        x1 = frame.left,
        x2 = frame.right(),
        y = frame.bottom(),
    ));
    if let Some(axis) = &chart.x_axis {
        draw_x_title(out, frame, &axis.title, frame.bottom() + MARGIN_BOTTOM - 12.0);
    }
}

/// Ticks for a scatter axis, padded so edge markers stay inside the frame
fn padded_ticks(min: f64, max: f64) -> Vec<f64> {
    let pad = if max > min { (max - min) * 0.1 } else { 1.0 };
    nice_ticks(min - pad, max + pad, TICK_COUNT)
}

fn draw_scatter(out: &mut String, chart: &ChartArtifact, frame: Frame) {
    let (x_axis, y_axis) = match (&chart.x_axis, &chart.y_axis) {
        (Some(x), Some(y)) => (x, y),
        _ => return,
    };

    let x_ticks = padded_ticks(x_axis.min, x_axis.max);
    let y_ticks = padded_ticks(y_axis.min, y_axis.max);
    let domain = |ticks: &[f64]| {
        (
            ticks.first().copied().unwrap_or(0.0),
            ticks.last().copied().unwrap_or(1.0),
        )
    };

    let x = Scale {
        domain: domain(x_ticks.as_slice()),
        range: (frame.left, frame.right()),
    };
    let y = Scale {
        domain: domain(y_ticks.as_slice()),
        range: (frame.bottom(), frame.top),
    };

    draw_y_axis(out, frame, y, &y_ticks, &y_axis.title);
    for &tick in &x_ticks {
        let px = x.map(tick);
        out.push_str(&format!(
            r#"<line x1="{px:.2}" y1="{y1}" x2="{px:.2}" y2="{y2}" stroke="{GRID_COLOR}"/><text class="tick" x="{px:.2}" y="{ty}" font-size="11" text-anchor="middle" fill="{AXIS_COLOR}">{label}</text>"#,
            y1 = frame.top,
            y2 = frame.bottom(),
            ty = frame.bottom() + 18.0,
            label = format_value(tick),
        ));
    }
    draw_x_title(out, frame, &x_axis.title, frame.bottom() + 44.0);

    out.push_str(r#"<g class="plot">"#);
    for mark in &chart.marks {
        if let Geometry::Point { x: vx, y: vy, radius } = mark.geometry {
            let (cx, cy) = (x.map(vx), y.map(vy));
            out.push_str(&format!(
                r##"<circle {attrs} cx="{cx:.2}" cy="{cy:.2}" r="{radius:.2}" fill-opacity="0.8" stroke="#FFFFFF">{title}</circle>"##,
                attrs = mark_open(mark),
                title = tooltip_element(mark),
            ));
            if let Some(label) = &mark.label {
                out.push_str(&format!(
                    r#"<text class="point-label" pointer-events="none" x="{cx:.2}" y="{ly:.2}" font-size="11" text-anchor="middle" fill="{AXIS_COLOR}">{text}</text>"#,
                    ly = cy - radius - 4.0,
                    text = escape(label),
                ));
            }
        }
    }
    out.push_str("</g>");
}

fn draw_pie(out: &mut String, chart: &ChartArtifact, frame: Frame) {
    let cx = frame.left + frame.width / 2.0;
    let cy = frame.top + frame.height / 2.0;
    let r = frame.width.min(frame.height) / 2.0 * 0.95;
    let point = |fraction: f64, radius: f64| {
        let angle = fraction * 2.0 * PI - PI / 2.0;
        (cx + radius * angle.cos(), cy + radius * angle.sin())
    };

    out.push_str(r#"<g class="plot">"#);
    for mark in &chart.marks {
        let Geometry::Slice { start, fraction } = mark.geometry else {
            continue;
        };

        if fraction >= 1.0 - 1e-9 {
            out.push_str(&format!(
                r##"<circle {attrs} cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" stroke="#FFFFFF">{title}</circle>"##,
                attrs = mark_open(mark),
                title = tooltip_element(mark),
            ));
        } else {
            let (x0, y0) = point(start, r);
            let (x1, y1) = point(start + fraction, r);
            let large_arc = if fraction > 0.5 { 1 } else { 0 };
            out.push_str(&format!(
                r##"<path {attrs} d="M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z" stroke="#FFFFFF">{title}</path>"##,
                attrs = mark_open(mark),
                title = tooltip_element(mark),
            ));
        }

        if fraction >= 0.04 {
            let (lx, ly) = point(start + fraction / 2.0, r * 0.65);
            out.push_str(&format!(
                r##"<text class="slice-label" pointer-events="none" x="{lx:.2}" y="{ly:.2}" font-size="12" text-anchor="middle" fill="#FFFFFF">{pct:.1}%</text>"##,
                pct = fraction * 100.0,
            ));
        }
    }
    out.push_str("</g>");
}

fn draw_legend(out: &mut String, chart: &ChartArtifact, frame: Frame) {
    let x = frame.right() + 24.0;
    out.push_str(r#"<g class="legend">"#);

    if let Some(ColorScale::Continuous {
        field,
        min,
        max,
        low,
        high,
    }) = &chart.color_scale
    {
        let gradient = format!("scale-{}", escape(&chart.id));
        let bar_height = frame.height * 0.6;
        out.push_str(&format!(
            r#"<defs><linearGradient id="{gradient}" x1="0" y1="1" x2="0" y2="0"><stop offset="0" stop-color="{low}"/><stop offset="1" stop-color="{high}"/></linearGradient></defs><text x="{x}" y="{ty}" font-size="11" fill="{AXIS_COLOR}">{field}</text><rect x="{x}" y="{top}" width="14" height="{bar_height:.2}" fill="url(#{gradient})"/><text x="{lx}" y="{max_y}" font-size="11" fill="{AXIS_COLOR}">{max}</text><text x="{lx}" y="{min_y:.2}" font-size="11" fill="{AXIS_COLOR}">{min}</text>"#,
            ty = frame.top - 8.0,
            top = frame.top,
            lx = x + 20.0,
            max_y = frame.top + 10.0,
            min_y = frame.top + bar_height,
            field = escape(field),
            max = format_value(*max),
            min = format_value(*min),
        ));
    }

    for (idx, entry) in chart.legend.iter().enumerate() {
        let y = frame.top + idx as f64 * 22.0;
        out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="12" height="12" fill="{color}"/><text x="{tx}" y="{ty}" font-size="12" fill="{AXIS_COLOR}">{label}</text>"#,
            color = entry.color,
            tx = x + 18.0,
            ty = y + 10.5,
            label = escape(&entry.label),
        ));
    }

    out.push_str("</g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::renderer::render;
    use crate::chart::spec::{ChartKind, ChartSpec};
    use crate::datasets::registry::{self, *};

    fn count_marks(svg: &str) -> usize {
        svg.matches(r#"class="mark""#).count()
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 5200.0, 5), vec![0.0, 2000.0, 4000.0, 6000.0]);
        assert_eq!(nice_ticks(0.0, 25.0, 5), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);

        let flat = nice_ticks(3.0, 3.0, 5);
        assert!(flat.len() >= 2);
        assert!(flat[0] <= 3.0 && *flat.last().unwrap() >= 4.0 - 1e-9);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Plant-based R&D <x>"), "Plant-based R&amp;D &lt;x&gt;");
    }

    #[test]
    fn test_bar_svg_has_one_rect_per_mark() {
        let chart = render(
            &registry::products(),
            &ChartSpec::new(ChartKind::Bar, "Exports", PRODUCT).value(EXPORT_VALUE),
        )
        .unwrap();
        let svg = to_svg(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(count_marks(&svg), chart.mark_count());
        assert!(svg.contains("<title>Beef: 2100</title>"));
        assert!(svg.contains(r#"data-zoomable="true""#));
    }

    #[test]
    fn test_pie_svg_is_not_zoomable() {
        let chart = render(
            &registry::resilience(),
            &ChartSpec::new(ChartKind::Pie, "Resilience", STRATEGY).value(ADOPTION_RATE),
        )
        .unwrap();
        let svg = to_svg(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        assert_eq!(count_marks(&svg), 4);
        assert!(!svg.contains("data-zoomable"));
        assert!(svg.contains("25.0%"));
        assert_eq!(
            svg.matches(r#"class="slice-label" pointer-events="none""#).count(),
            4
        );
        assert!(svg.contains(r#"class="legend""#));
    }

    #[test]
    fn test_scatter_svg_labels_points() {
        let chart = render(
            &registry::agtech(),
            &ChartSpec::new(ChartKind::ScatterWithLabels, "AgTech", COMPANY)
                .values([AI_USAGE, BLOCKCHAIN_INTEGRATION])
                .size(AI_USAGE),
        )
        .unwrap();
        let svg = to_svg(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        assert_eq!(count_marks(&svg), 4);
        assert_eq!(
            svg.matches(r#"class="point-label" pointer-events="none""#).count(),
            4
        );
        assert!(svg.contains("Agri-Tech Centre (Teagasc)"));
    }

    #[test]
    fn test_continuous_scale_draws_gradient() {
        let chart = render(
            &registry::sustainability(),
            &ChartSpec::new(ChartKind::Bar, "Sustainability", FARM)
                .value(CARBON_OFFSET)
                .color(REGENERATIVE_PRACTICES),
        )
        .unwrap();
        let svg = to_svg(&chart, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        assert!(svg.contains("linearGradient"));
        assert!(svg.contains(&escape(REGENERATIVE_PRACTICES)));
    }
}
