//! Angular partition of a full turn into equal sectors

use std::f64::consts::TAU;

use crate::types::Angle;

/// Where sector 0 starts: three quarters of a turn from +x.
///
/// In screen coordinates (+y down) that is straight up, so the first slice
/// starts at 12 o'clock and slices proceed clockwise on screen.
pub const CHART_ZERO: Angle = Angle::radians(TAU * 3.0 / 4.0);

/// One of `n` equal sectors.
///
/// `start` is reduced to `[0, 2π)`; `end` is always `start + 2π/n` and may run
/// past `2π`, so `end > start` holds for every sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub start: Angle,
    pub end: Angle,
}

impl Sector {
    pub fn span(&self) -> Angle {
        self.end - self.start
    }

    /// The angle midway between `start` and `end`
    pub fn bisector(&self) -> Angle {
        (self.start + self.end) / 2.0
    }
}

/// Size of each sector, or `None` when there are no sectors.
pub fn delta_angle(n: usize) -> Option<Angle> {
    (n > 0).then(|| Angle::FULL_TURN / n as f64)
}

/// Partition a full turn into `n` contiguous sectors, starting at [`CHART_ZERO`].
///
/// Returns an empty partition for `n == 0`.
pub fn sector_angles(n: usize) -> Vec<Sector> {
    let Some(delta) = delta_angle(n) else {
        return Vec::new();
    };
    (0..n)
        .map(|index| {
            let start = (delta * index as f64 + CHART_ZERO).normalized();
            Sector {
                index,
                start,
                end: start + delta,
            }
        })
        .collect()
}
