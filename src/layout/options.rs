//! Layout configuration
//!
//! Everything a host may want to override is an explicit field here with a
//! concrete default.

use crate::errors::LayoutError;
use crate::model::{FillStyle, StrokeStyle};
use crate::types::{Color, Length};

use super::defaults;

/// Bounds of the host view the chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub(crate) fn validate(self) -> Result<Self, LayoutError> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(LayoutError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn center(self) -> glam::DVec2 {
        glam::dvec2(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the disk that accepts taps (half the view's width)
    pub fn hit_radius(self) -> f64 {
        self.width / 2.0
    }
}

/// Overrides applied to a selected slice. `None` keeps the slice's own value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStyle {
    pub stroke_width: Option<f64>,
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            stroke_width: Some(defaults::SELECTED_STROKE_WIDTH),
            stroke_color: Some(Color::cyan()),
            fill_color: Some(Color::yellow()),
        }
    }
}

impl SelectionStyle {
    /// No overrides at all: selected slices look unselected.
    pub fn none() -> Self {
        Self {
            stroke_width: None,
            stroke_color: None,
            fill_color: None,
        }
    }

    pub fn apply(&self, stroke: &StrokeStyle, fill: &FillStyle) -> (StrokeStyle, FillStyle) {
        let stroke = StrokeStyle {
            color: self.stroke_color.clone().unwrap_or_else(|| stroke.color.clone()),
            width: self.stroke_width.unwrap_or(stroke.width),
        };
        let fill = FillStyle {
            color: self.fill_color.clone().unwrap_or_else(|| fill.color.clone()),
        };
        (stroke, fill)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub radius_margin: Length,
    pub slice_label_offset: Length,
    pub ring_label_inset: f64,
    pub divider: StrokeStyle,
    pub icon_size: f64,
    pub icon_offset: Length,
    pub selection: SelectionStyle,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            radius_margin: defaults::RADIUS_MARGIN,
            slice_label_offset: defaults::SLICE_LABEL_OFFSET,
            ring_label_inset: defaults::RING_LABEL_INSET,
            divider: StrokeStyle::new(Color::white(), defaults::DIVIDER_WIDTH),
            icon_size: defaults::ICON_SIZE,
            icon_offset: defaults::ICON_OFFSET,
            selection: SelectionStyle::default(),
        }
    }
}

impl LayoutOptions {
    /// Maximum radius used when the data source does not override it.
    ///
    /// May be negative for small viewports; the caller validates it.
    pub fn default_max_radius(&self, viewport: Viewport) -> f64 {
        viewport.width.min(viewport.height) / 2.0 - self.radius_margin.raw()
    }
}
