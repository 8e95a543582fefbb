//! Strongly-typed numeric primitives for chart layout (zero-cost newtypes).
//!
//! Raw `f64` values coming from a data source are validated once, at the
//! boundary, through the `try_*` constructors. Past that point a `Length` is
//! never negative and a `Fraction` is always within `[0, 1]`.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
    /// Value lies outside the permitted range
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::OutOfRange => write!(f, "value is out of range"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// A non-negative distance in layout points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub(crate) f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length from a trusted constant.
    #[inline]
    pub(crate) const fn points(val: f64) -> Length {
        Length(val)
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_new(val)?;
        if len.0 == 0.0 {
            Err(NumericError::Zero)
        } else {
            Ok(len)
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

/// Saturates at zero: a `Length` cannot go negative.
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length((self.0 - rhs.0).max(0.0)) }
}

impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

impl Mul<Fraction> for Length {
    type Output = Length;
    fn mul(self, rhs: Fraction) -> Length { Length(self.0 * rhs.0) }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unitless value in `[0, 1]` (slice radius multipliers).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Fraction(f64);

impl Fraction {
    pub fn try_new(val: f64) -> Result<Fraction, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else if val > 1.0 {
            Err(NumericError::OutOfRange)
        } else {
            Ok(Fraction(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An angle in radians, measured from +x towards +y.
///
/// Angles are not normalised on construction; sector bounds deliberately run
/// past `2π` so that `end > start` always holds. Use [`Angle::normalized`] or
/// [`Angle::degrees_normalized`] when a canonical value is needed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const QUARTER_TURN: Angle = Angle(TAU / 4.0);
    pub const HALF_TURN: Angle = Angle(TAU / 2.0);
    pub const FULL_TURN: Angle = Angle(TAU);

    #[inline]
    pub const fn radians(val: f64) -> Angle {
        Angle(val)
    }

    #[inline]
    pub fn degrees(val: f64) -> Angle {
        Angle(val.to_radians())
    }

    /// Angle of the vector from `origin` to `point`.
    #[inline]
    pub fn of_vector(origin: DVec2, point: DVec2) -> Angle {
        let d = point - origin;
        Angle(d.y.atan2(d.x))
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Reduce to `[0, 2π)`.
    #[inline]
    pub fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(TAU))
    }

    /// Reduce to `[0°, 360°)` and convert to degrees.
    #[inline]
    pub fn degrees_normalized(self) -> f64 {
        let deg = self.0.to_degrees().rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if deg >= 360.0 { 0.0 } else { deg }
    }

    /// Unit vector pointing along this angle.
    #[inline]
    pub fn unit(self) -> DVec2 {
        let (sin, cos) = self.0.sin_cos();
        DVec2::new(cos, sin)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle { Angle(self.0 * rhs) }
}

impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle { Angle(self.0 / rhs) }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

/// Simple color model; renderers map these onto their own color types.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Color {
    /// Fully transparent
    #[default]
    Clear,
    Named(String),
    Rgb(u8, u8, u8),
    /// Alpha in `[0, 1]`
    Rgba(u8, u8, u8, f64),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Color {
        Color::Named(name.into())
    }

    pub fn black() -> Color { Color::Rgb(0, 0, 0) }
    pub fn white() -> Color { Color::Rgb(255, 255, 255) }
    pub fn cyan() -> Color { Color::Rgb(0, 255, 255) }
    pub fn yellow() -> Color { Color::Rgb(255, 255, 0) }

    /// Same color with a new alpha. Named colors are left untouched.
    pub fn with_alpha(self, alpha: f64) -> Color {
        match self {
            Color::Rgb(r, g, b) | Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, alpha.clamp(0.0, 1.0)),
            other => other,
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Color::Clear)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Clear => write!(f, "none"),
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// Axis-aligned bounding box in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include a circle
    pub fn expand_circle(&mut self, center: DVec2, radius: f64) {
        self.expand_point(center - DVec2::splat(radius));
        self.expand_point(center + DVec2::splat(radius));
    }

    pub fn union(&mut self, other: &BBox) {
        if !other.is_empty() {
            self.expand_point(other.min);
            self.expand_point(other.max);
        }
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max.x - self.min.x }
    }
}
