//! Default sizes and settings (all in layout points)

use crate::types::Length;

/// Subtracted from half the viewport's shorter side to get the default radius
pub const RADIUS_MARGIN: Length = Length::points(50.0);
/// Slice labels sit on an arc this far outside the maximum radius
pub const SLICE_LABEL_OFFSET: Length = Length::points(15.0);
/// Ring labels are inset from the ring's topmost point by this much
pub const RING_LABEL_INSET: f64 = 4.0;
pub const DIVIDER_WIDTH: f64 = 1.5;
pub const ICON_SIZE: f64 = 35.0;
/// Divider icons are centred this far outside the maximum radius
pub const ICON_OFFSET: Length = Length::points(25.0);
pub const SELECTED_STROKE_WIDTH: f64 = 4.0;
