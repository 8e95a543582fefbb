//! SVG generation
//!
//! A reference consumer of [`Scene`]: it walks the nodes in paint order and
//! writes one standalone document. Hosts with their own drawing stack read
//! the scene directly instead.

use ::svg::node::element::path::Data;
use ::svg::node::element::{Circle, Line, Path, Text, Use};
use ::svg::{Document, Node};
use glam::DVec2;

use crate::layout::options::SelectionStyle;
use crate::model::{Dash, FillStyle, StrokeStyle};
use crate::scene::{IconPlacement, LabelRun, Primitive, RingLabel, Scene, WedgeGeometry};
use crate::types::Angle;

/// Per-document rendering choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgOptions {
    /// Slice painted with the scene's selection style
    pub selected: Option<usize>,
}

impl SvgOptions {
    pub fn selected(index: usize) -> Self {
        Self {
            selected: Some(index),
        }
    }
}

/// State shared by every primitive while writing one document
#[derive(Debug, Clone, Copy)]
pub struct SvgContext<'a> {
    pub selected: Option<usize>,
    pub selection: &'a SelectionStyle,
}

/// Collects SVG elements in paint order.
#[derive(Default)]
pub struct SvgWriter {
    nodes: Vec<Box<dyn Node>>,
}

impl std::fmt::Debug for SvgWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgWriter").field("nodes", &self.nodes.len()).finish()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: impl Into<Box<dyn Node>>) {
        self.nodes.push(node.into());
    }

    pub fn circle(&mut self, center: DVec2, radius: f64, stroke: &StrokeStyle, fill: &FillStyle, dash: Option<Dash>) {
        let mut circle = Circle::new()
            .set("cx", fmt_num(center.x))
            .set("cy", fmt_num(center.y))
            .set("r", fmt_num(radius))
            .set("fill", fill.color.to_string())
            .set("stroke", stroke.color.to_string())
            .set("stroke-width", fmt_num(stroke.width));
        if let Some(dash) = dash {
            circle = circle.set(
                "stroke-dasharray",
                format!("{},{}", fmt_num(dash.length), fmt_num(dash.gap)),
            );
        }
        self.push(circle);
    }

    pub fn wedge(&mut self, wedge: &WedgeGeometry, stroke: &StrokeStyle, fill: &FillStyle) {
        self.push(
            Path::new()
                .set("d", wedge_path(wedge))
                .set("fill", fill.color.to_string())
                .set("stroke", stroke.color.to_string())
                .set("stroke-width", fmt_num(stroke.width)),
        );
    }

    pub fn line(&mut self, from: DVec2, to: DVec2, stroke: &StrokeStyle) {
        self.push(
            Line::new()
                .set("x1", fmt_num(from.x))
                .set("y1", fmt_num(from.y))
                .set("x2", fmt_num(to.x))
                .set("y2", fmt_num(to.y))
                .set("stroke", stroke.color.to_string())
                .set("stroke-width", fmt_num(stroke.width)),
        );
    }

    /// Icon placeholder referencing a symbol the host document defines
    pub fn icon(&mut self, icon: &IconPlacement) {
        let half = icon.size / 2.0;
        self.push(
            Use::new()
                .set("href", format!("#{}", icon.icon.name))
                .set("x", fmt_num(icon.center.x - half))
                .set("y", fmt_num(icon.center.y - half))
                .set("width", fmt_num(icon.size))
                .set("height", fmt_num(icon.size))
                .set("transform", rotate(icon.rotation, icon.center)),
        );
    }

    /// Straight ring caption, top-left anchored
    pub fn caption(&mut self, label: &RingLabel) {
        if label.text.is_empty() {
            return;
        }
        self.push(
            Text::new(label.text.as_str())
                .set("x", fmt_num(label.origin.x))
                .set("y", fmt_num(label.origin.y))
                .set("font-size", fmt_num(label.font_size))
                .set("fill", label.color.to_string())
                .set("dominant-baseline", "hanging"),
        );
    }

    /// One `<text>` per glyph, each rotated about its own centre
    pub fn label_run(&mut self, run: &LabelRun) {
        for glyph in run.glyphs.iter().filter(|g| !g.ch.is_whitespace()) {
            self.push(
                Text::new(glyph.ch.to_string())
                    .set("x", fmt_num(glyph.position.x))
                    .set("y", fmt_num(glyph.position.y))
                    .set("transform", rotate(glyph.screen_rotation, glyph.position))
                    .set("font-size", fmt_num(run.font_size))
                    .set("fill", run.color.to_string())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central"),
            );
        }
    }

    /// Wrap the collected elements in a root `<svg>` of the given size.
    pub fn finish(self, width: f64, height: f64) -> Document {
        let (w, h) = (fmt_num(width), fmt_num(height));
        let document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w.as_str())
            .set("height", h.as_str())
            .set("viewBox", format!("0 0 {w} {h}"));
        self.nodes.into_iter().fold(document, |document, node| document.add(node))
    }
}

/// Render `scene` as a standalone SVG document sized to its viewport.
pub fn to_svg(scene: &Scene, options: &SvgOptions) -> String {
    let ctx = SvgContext {
        selected: options.selected,
        selection: &scene.selection,
    };

    let mut out = SvgWriter::new();
    for node in scene.nodes() {
        node.write_svg(&mut out, &ctx);
    }
    for node in scene.nodes() {
        node.write_svg_overlay(&mut out, &ctx);
    }
    let elements = out.nodes.len();
    let svg = out.finish(scene.viewport.width, scene.viewport.height).to_string();

    crate::log::debug!(
        elements,
        selected = ?options.selected,
        bytes = svg.len(),
        "rendered svg"
    );
    svg
}

/// `M centre L start A r r 0 large 1 end Z`, or two half arcs for a full turn
fn wedge_path(wedge: &WedgeGeometry) -> Data {
    let r = wedge.radius.raw() as f32;
    let start = point(wedge.start_point);
    let span = wedge.sector.span();
    if span.raw() >= Angle::FULL_TURN.raw() - 1e-12 {
        let mid = point(wedge.center + (wedge.sector.start + Angle::HALF_TURN).unit() * wedge.radius.raw());
        return Data::new()
            .move_to(start)
            .elliptical_arc_to(vec![r, r, 0.0, 1.0, 1.0, mid.0, mid.1])
            .elliptical_arc_to(vec![r, r, 0.0, 1.0, 1.0, start.0, start.1])
            .close();
    }
    // A half turn is drawn the same either way; keep rounding from flipping it
    let large = if span.raw() > Angle::HALF_TURN.raw() + 1e-9 { 1.0 } else { 0.0 };
    let end = point(wedge.end_point);
    Data::new()
        .move_to(point(wedge.center))
        .line_to(start)
        .elliptical_arc_to(vec![r, r, 0.0, large, 1.0, end.0, end.1])
        .close()
}

/// Path data is single precision.
fn point(p: DVec2) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn rotate(angle: Angle, about: DVec2) -> String {
    format!(
        "rotate({} {} {})",
        fmt_num(angle.degrees_normalized()),
        fmt_num(about.x),
        fmt_num(about.y)
    )
}

/// Format a number with at most three decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
