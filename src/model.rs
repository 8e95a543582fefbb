//! Chart data model and the data-provider interface
//!
//! A host hands the layout engine a [`ChartDataSource`]. The engine pulls a
//! complete snapshot out of it (counts first, then every slice and ring) and
//! never calls back into it during layout.

use crate::font::{FontMetrics, LabelFont};
use crate::types::{Color, Fraction};

/// Text drawn on the chart, either curved (slices) or straight (rings).
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub color: Color,
    pub font_size: f64,
    /// Extra tracking added to every character's advance width
    pub spacing: f64,
    /// Metrics for this label only; `None` uses the chart's font
    pub font: Option<LabelFont>,
}

impl Label {
    pub const DEFAULT_FONT_SIZE: f64 = 15.0;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::black(),
            font_size: Self::DEFAULT_FONT_SIZE,
            spacing: 0.0,
            font: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = Some(font);
        self
    }

    /// The label's own font, or `fallback`.
    pub fn metrics<'a>(&'a self, fallback: &'a dyn FontMetrics) -> &'a dyn FontMetrics {
        match &self.font {
            Some(font) => font,
            None => fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::black(),
            width: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Dash pattern for ring outlines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub length: f64,
    pub gap: f64,
}

impl Dash {
    pub fn new(length: f64, gap: f64) -> Self {
        Self { length, gap }
    }
}

/// A wedge whose radius encodes a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Raw multiplier as supplied; validated to `[0, 1]` at layout time
    pub radius_fraction: f64,
    pub label: Label,
    pub stroke: StrokeStyle,
    pub fill: FillStyle,
}

impl Slice {
    pub fn new(radius_fraction: f64, label: Label) -> Self {
        Self {
            radius_fraction,
            label,
            stroke: StrokeStyle::default(),
            fill: FillStyle::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }
}

/// A concentric reference circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub label: Label,
    pub stroke: StrokeStyle,
    pub fill: FillStyle,
    pub dash: Option<Dash>,
}

impl Ring {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            stroke: StrokeStyle::new(Color::black(), 1.0),
            fill: FillStyle::default(),
            dash: None,
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Opaque key of an icon drawn at the outer end of a divider line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DividerIcon {
    pub name: String,
}

impl DividerIcon {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Pull-based provider of chart contents.
///
/// Indices passed to `slice`, `ring` and `divider_icon` are always below the
/// corresponding count.
pub trait ChartDataSource {
    fn slice_count(&self) -> usize;

    fn ring_count(&self) -> usize;

    fn slice(&self, index: usize) -> Slice;

    fn ring(&self, index: usize) -> Ring;

    /// Icon for the divider line at the start of slice `index`
    fn divider_icon(&self, _index: usize) -> Option<DividerIcon> {
        None
    }

    /// Override for the chart's maximum radius. `None` uses the viewport default.
    fn max_radius(&self) -> Option<f64> {
        None
    }
}

/// Owned snapshot of everything a layout pass needs from a data source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub slices: Vec<Slice>,
    pub rings: Vec<Ring>,
    /// One entry per slice boundary; shorter than `slices` means no icon
    pub divider_icons: Vec<Option<DividerIcon>>,
    pub max_radius: Option<f64>,
}

impl ChartData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull every item out of `source`.
    pub fn snapshot(source: &dyn ChartDataSource) -> Self {
        let slice_count = source.slice_count();
        let ring_count = source.ring_count();
        Self {
            slices: (0..slice_count).map(|i| source.slice(i)).collect(),
            rings: (0..ring_count).map(|i| source.ring(i)).collect(),
            divider_icons: (0..slice_count).map(|i| source.divider_icon(i)).collect(),
            max_radius: source.max_radius(),
        }
    }

    pub fn with_slice(mut self, slice: Slice) -> Self {
        self.slices.push(slice);
        self
    }

    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.rings.push(ring);
        self
    }

    pub fn with_divider_icon(mut self, index: usize, icon: DividerIcon) -> Self {
        if self.divider_icons.len() <= index {
            self.divider_icons.resize(index + 1, None);
        }
        self.divider_icons[index] = Some(icon);
        self
    }

    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = Some(max_radius);
        self
    }

    /// Validated radius fraction of slice `index`
    pub(crate) fn fraction(&self, index: usize) -> Result<Fraction, crate::errors::LayoutError> {
        let value = self.slices[index].radius_fraction;
        Fraction::try_new(value).map_err(|reason| crate::errors::LayoutError::InvalidRadiusFraction {
            index,
            value,
            reason,
        })
    }
}

impl ChartDataSource for ChartData {
    fn slice_count(&self) -> usize {
        self.slices.len()
    }

    fn ring_count(&self) -> usize {
        self.rings.len()
    }

    fn slice(&self, index: usize) -> Slice {
        self.slices[index].clone()
    }

    fn ring(&self, index: usize) -> Ring {
        self.rings[index].clone()
    }

    fn divider_icon(&self, index: usize) -> Option<DividerIcon> {
        self.divider_icons.get(index).cloned().flatten()
    }

    fn max_radius(&self) -> Option<f64> {
        self.max_radius
    }
}
