//! The immutable output of one layout pass
//!
//! A [`Scene`] is a flat, paint-ordered list of [`SceneNode`]s: rings first,
//! then wedges, then divider lines. Each node carries fully resolved
//! geometry and styling, so a renderer never has to call back into the
//! layout engine. Scenes are rebuilt from scratch on every reload.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::layout::angles::Sector;
use crate::layout::arc_text::Winding;
use crate::layout::hit_test::slice_index_at;
use crate::layout::options::{SelectionStyle, Viewport};
use crate::model::{Dash, DividerIcon, FillStyle, StrokeStyle};
use crate::render::svg::{SvgContext, SvgWriter};
use crate::types::{Angle, BBox, Color, Length};

/// Common behavior for everything in a scene
#[enum_dispatch]
pub trait Primitive {
    /// Screen-space bounds, labels included
    fn bounds(&self) -> BBox;

    /// Emit the primitive's shapes
    fn write_svg(&self, out: &mut SvgWriter, ctx: &SvgContext<'_>);

    /// Emit anything that must sit above every shape (ring captions)
    fn write_svg_overlay(&self, _out: &mut SvgWriter, _ctx: &SvgContext<'_>) {}
}

#[enum_dispatch(Primitive)]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Ring(RingGeometry),
    Wedge(WedgeGeometry),
    Divider(Divider),
}

/// One character of a curved label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub width: f64,
    /// Label-frame angle (y-up) of the glyph centre
    pub angle: Angle,
    /// Label-frame rotation
    pub rotation: Angle,
    /// Glyph centre in screen coordinates
    pub position: DVec2,
    /// Rotation to apply about `position` in screen coordinates
    pub screen_rotation: Angle,
}

/// A slice label following the arc outside the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRun {
    pub text: String,
    pub color: Color,
    pub font_size: f64,
    pub radius: f64,
    pub winding: Winding,
    pub total_arc: Angle,
    pub glyphs: Vec<PlacedGlyph>,
}

/// A straight ring caption anchored near the top of its ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLabel {
    pub text: String,
    pub color: Color,
    pub font_size: f64,
    /// Top-left corner of the caption box
    pub origin: DVec2,
    /// Measured width and line height
    pub size: DVec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    pub index: usize,
    pub center: DVec2,
    pub radius: Length,
    pub stroke: StrokeStyle,
    pub fill: FillStyle,
    pub dash: Option<Dash>,
    pub label: RingLabel,
}

impl Primitive for RingGeometry {
    fn bounds(&self) -> BBox {
        let mut b = BBox::new();
        b.expand_circle(self.center, self.radius.raw() + self.stroke.width / 2.0);
        b.expand_point(self.label.origin);
        b.expand_point(self.label.origin + self.label.size);
        b
    }

    fn write_svg(&self, out: &mut SvgWriter, _ctx: &SvgContext<'_>) {
        out.circle(self.center, self.radius.raw(), &self.stroke, &self.fill, self.dash);
    }

    fn write_svg_overlay(&self, out: &mut SvgWriter, _ctx: &SvgContext<'_>) {
        out.caption(&self.label);
    }
}

/// A pie wedge whose radius encodes its slice's value.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeGeometry {
    pub index: usize,
    pub center: DVec2,
    pub radius: Length,
    pub sector: Sector,
    /// Where the wedge's outer arc starts and ends
    pub start_point: DVec2,
    pub end_point: DVec2,
    pub stroke: StrokeStyle,
    pub fill: FillStyle,
    pub label: LabelRun,
}

impl WedgeGeometry {
    /// Whether `point` lies inside the wedge (edges included).
    pub fn contains(&self, point: DVec2) -> bool {
        if point.distance(self.center) > self.radius.raw() {
            return false;
        }
        if point == self.center {
            return true;
        }
        let span = self.sector.span();
        // A lone slice spans a full turn, give or take rounding
        if span.raw() >= Angle::FULL_TURN.raw() - 1e-12 {
            return true;
        }
        let from_start = (Angle::of_vector(self.center, point) - self.sector.start).normalized();
        from_start <= span
    }

    /// Stroke and fill to paint with, given the selection state.
    pub fn resolved_style(&self, selected: bool, selection: &SelectionStyle) -> (StrokeStyle, FillStyle) {
        if selected {
            selection.apply(&self.stroke, &self.fill)
        } else {
            (self.stroke.clone(), self.fill.clone())
        }
    }
}

impl Primitive for WedgeGeometry {
    fn bounds(&self) -> BBox {
        let mut b = BBox::new();
        b.expand_point(self.center);
        b.expand_point(self.start_point);
        b.expand_point(self.end_point);

        // Axis extremes the outer arc sweeps through
        let start = self.sector.start.raw();
        let end = self.sector.end.raw();
        let quarter = Angle::QUARTER_TURN.raw();
        let mut k = (start / quarter).ceil();
        while k * quarter <= end {
            b.expand_point(self.center + Angle::radians(k * quarter).unit() * self.radius.raw());
            k += 1.0;
        }

        for glyph in &self.label.glyphs {
            b.expand_circle(glyph.position, glyph.width.max(self.label.font_size) / 2.0);
        }
        b
    }

    fn write_svg(&self, out: &mut SvgWriter, ctx: &SvgContext<'_>) {
        let (stroke, fill) = self.resolved_style(ctx.selected == Some(self.index), ctx.selection);
        out.wedge(self, &stroke, &fill);
        out.label_run(&self.label);
    }
}

/// Icon drawn just outside the chart at the end of a divider line.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPlacement {
    pub icon: DividerIcon,
    pub center: DVec2,
    pub size: f64,
    pub rotation: Angle,
}

/// Straight line from the centre along a slice boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Divider {
    pub index: usize,
    pub angle: Angle,
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: StrokeStyle,
    pub icon: Option<IconPlacement>,
}

impl Primitive for Divider {
    fn bounds(&self) -> BBox {
        let mut b = BBox::new();
        b.expand_point(self.from);
        b.expand_point(self.to);
        if let Some(icon) = &self.icon {
            b.expand_circle(icon.center, icon.size * std::f64::consts::FRAC_1_SQRT_2);
        }
        b
    }

    fn write_svg(&self, out: &mut SvgWriter, _ctx: &SvgContext<'_>) {
        out.line(self.from, self.to, &self.stroke);
        if let Some(icon) = &self.icon {
            out.icon(icon);
        }
    }
}

/// Everything one layout pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub center: DVec2,
    /// Maximum radius after ring adjustment
    pub max_radius: Length,
    /// Radius of the arc slice labels sit on
    pub label_radius: f64,
    pub selection: SelectionStyle,
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub(crate) fn new(
        viewport: Viewport,
        max_radius: Length,
        label_radius: f64,
        selection: SelectionStyle,
        nodes: Vec<SceneNode>,
    ) -> Self {
        Self {
            viewport,
            center: viewport.center(),
            max_radius,
            label_radius,
            selection,
            nodes,
        }
    }

    /// Every node in paint order
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn rings(&self) -> impl Iterator<Item = &RingGeometry> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Ring(r) => Some(r),
            _ => None,
        })
    }

    pub fn wedges(&self) -> impl Iterator<Item = &WedgeGeometry> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Wedge(w) => Some(w),
            _ => None,
        })
    }

    pub fn dividers(&self) -> impl Iterator<Item = &Divider> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Divider(d) => Some(d),
            _ => None,
        })
    }

    pub fn slice_count(&self) -> usize {
        self.wedges().count()
    }

    pub fn bounds(&self) -> BBox {
        let mut b = BBox::new();
        for node in &self.nodes {
            b.union(&node.bounds());
        }
        b
    }

    /// Slice whose angular sector contains `point`, if the point is within
    /// the view's tap disk.
    pub fn slice_at(&self, point: DVec2) -> Option<usize> {
        slice_index_at(point, self.center, self.slice_count(), self.viewport.hit_radius())
    }

    /// Slice whose drawn wedge contains `point`.
    pub fn wedge_at(&self, point: DVec2) -> Option<usize> {
        self.wedges().find(|w| w.contains(point)).map(|w| w.index)
    }
}
