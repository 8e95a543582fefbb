//! Polar to Cartesian mapping and concentric ring radii

use glam::DVec2;

use crate::types::{Angle, Length};

/// Point at `radius` along `angle` from `center`.
pub fn to_cartesian(center: DVec2, radius: f64, angle: Angle) -> DVec2 {
    center + angle.unit() * radius
}

/// Ring radii plus the maximum radius the rest of the layout must use.
#[derive(Debug, Clone, PartialEq)]
pub struct RingScale {
    pub radii: Vec<Length>,
    /// Outermost ring radius as accumulated, or the requested radius if there
    /// are no rings
    pub max_radius: Length,
}

/// Radii of `count` evenly spaced rings out to `max_radius`.
///
/// Radii are accumulated gap by gap rather than computed as `(i + 1) * gap`,
/// and the last accumulated value replaces `max_radius` for everything laid
/// out afterwards. Wedges and labels therefore scale against the outermost
/// ring as drawn, which can differ from the requested radius by rounding.
pub fn ring_radii(count: usize, max_radius: Length) -> RingScale {
    if count == 0 {
        return RingScale {
            radii: Vec::new(),
            max_radius,
        };
    }

    let gap = max_radius / count as f64;
    let mut current = gap;
    let mut radii = Vec::with_capacity(count);
    for _ in 0..count {
        radii.push(current);
        current += gap;
    }

    RingScale {
        max_radius: current - gap,
        radii,
    }
}
