//! Text that follows a circular baseline
//!
//! Angles in this module live in the *label frame*: the screen frame mirrored
//! vertically, so +y points up and angles grow counter-clockwise as seen by
//! the viewer. A glyph at label-frame angle `θ` sits at screen offset
//! `(r·cos θ, −r·sin θ)` from the chart centre and is drawn rotated by
//! `−rotation` in screen space. [`ArcGlyph::screen_position`] and
//! [`ArcGlyph::screen_rotation`] do that conversion.
//!
//! Each character's advance width is treated as a chord of the circle and
//! converted to the angle it subtends: `arc = 2·asin(w / 2r)`. The label is
//! centred on the requested angle and laid out character by character in the
//! chosen [`Winding`].

use std::f64::consts::FRAC_PI_2;

use glam::{DVec2, dvec2};

use crate::errors::LayoutError;
use crate::font::FontMetrics;
use crate::model::Label;
use crate::types::{Angle, NumericError};

/// Which way characters advance around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Upright at 12 o'clock, upside down at 6 o'clock
    Clockwise,
    /// Upright at 6 o'clock, upside down at 12 o'clock
    CounterClockwise,
}

impl Winding {
    /// Winding that keeps a label upright when centred on a sector whose
    /// bisector is `bisector` in screen coordinates.
    ///
    /// Bisectors in the lower half of the screen (`[0, π]` with +y down) read
    /// counter-clockwise, everything else clockwise.
    pub fn for_bisector(bisector: Angle) -> Winding {
        let b = bisector.normalized().raw();
        if (0.0..=std::f64::consts::PI).contains(&b) {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    fn direction(self) -> f64 {
        match self {
            Winding::Clockwise => -1.0,
            Winding::CounterClockwise => 1.0,
        }
    }

    /// Turns a tangent-aligned glyph so its baseline follows the arc
    fn slant_correction(self) -> Angle {
        match self {
            Winding::Clockwise => Angle::radians(-FRAC_PI_2),
            Winding::CounterClockwise => Angle::radians(FRAC_PI_2),
        }
    }
}

/// Angle subtended by a chord of length `chord` on a circle of `radius`.
///
/// Returns `None` when the chord is longer than the diameter.
pub fn chord_to_arc(chord: f64, radius: f64) -> Option<Angle> {
    if chord <= 0.0 {
        return Some(Angle::ZERO);
    }
    if radius <= 0.0 || chord > 2.0 * radius {
        return None;
    }
    Some(Angle::radians(2.0 * (chord / (2.0 * radius)).asin()))
}

/// One character placed on the arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGlyph {
    pub ch: char,
    /// Advance width, including label spacing
    pub width: f64,
    /// Angle subtended by this character
    pub arc: Angle,
    /// Label-frame angle of the glyph's centre
    pub angle: Angle,
    /// Label-frame rotation of the glyph
    pub rotation: Angle,
}

impl ArcGlyph {
    /// Centre of the glyph in screen coordinates
    pub fn screen_position(&self, center: DVec2, radius: f64) -> DVec2 {
        let (sin, cos) = self.angle.raw().sin_cos();
        center + dvec2(radius * cos, -radius * sin)
    }

    /// Rotation to draw the glyph with in screen coordinates (+y down)
    pub fn screen_rotation(&self) -> Angle {
        -self.rotation
    }
}

/// A label laid out along an arc.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcText {
    pub radius: f64,
    pub center_angle: Angle,
    pub winding: Winding,
    /// Sum of every glyph's arc
    pub total_arc: Angle,
    pub glyphs: Vec<ArcGlyph>,
}

impl ArcText {
    /// Label-frame angles of the first and last glyph edges, in glyph order
    pub fn extent(&self) -> (Angle, Angle) {
        let half = self.total_arc / 2.0 * self.winding.direction();
        (self.center_angle - half, self.center_angle + half)
    }
}

/// Lay `label` out on a circle of `radius`, centred on `center_angle`.
///
/// The cursor starts half the label's total arc behind `center_angle`; each
/// character advances it by half its own arc, is emitted, then advances it by
/// the other half. The glyph angle is computed from the accumulated offset in
/// one step, so a single character lands exactly on `center_angle`.
pub fn layout_arc_text(
    label: &Label,
    font: &dyn FontMetrics,
    radius: f64,
    center_angle: Angle,
    winding: Winding,
) -> Result<ArcText, LayoutError> {
    if !label.spacing.is_finite() {
        let reason = if label.spacing.is_nan() { NumericError::NaN } else { NumericError::Infinite };
        return Err(LayoutError::numeric("label spacing")(reason));
    }

    let font = label.metrics(font);
    let mut measured = Vec::with_capacity(label.text.len());
    for ch in label.text.chars() {
        let width = (font.char_width(ch, label.font_size) + label.spacing).max(0.0);
        let arc = chord_to_arc(width, radius).ok_or(LayoutError::GlyphTooWide { ch, width, radius })?;
        measured.push((ch, width, arc));
    }

    let total: f64 = measured.iter().map(|(_, _, arc)| arc.raw()).sum();
    let total_arc = Angle::radians(total);
    if total_arc > Angle::FULL_TURN {
        crate::log::warn!(
            text = %label.text,
            radius,
            total_arc = total,
            "label wraps more than a full turn"
        );
    }

    let direction = winding.direction();
    let slant = winding.slant_correction();
    let mut consumed = 0.0;
    let glyphs = measured
        .into_iter()
        .map(|(ch, width, arc)| {
            let offset = (consumed + arc.raw() / 2.0) - total / 2.0;
            consumed += arc.raw();
            let angle = center_angle + Angle::radians(direction * offset);
            ArcGlyph {
                ch,
                width,
                arc,
                angle,
                rotation: angle + slant,
            }
        })
        .collect();

    crate::log::trace!(text = %label.text, radius, total_arc = total, "laid out arc text");

    Ok(ArcText {
        radius,
        center_angle,
        winding,
        total_arc,
        glyphs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{LabelFont, MonospaceFont, ProportionalFont};
    use std::f64::consts::{PI, TAU};

    const EPSILON: f64 = 1e-9;

    fn mono() -> MonospaceFont {
        MonospaceFont::new(0.5)
    }

    #[test]
    fn chord_to_arc_known_values() {
        // A chord equal to the radius subtends 60 degrees
        let a = chord_to_arc(10.0, 10.0).unwrap();
        assert!((a.to_degrees() - 60.0).abs() < EPSILON);
        // The diameter subtends a half turn
        let a = chord_to_arc(20.0, 10.0).unwrap();
        assert!((a.raw() - PI).abs() < EPSILON);
        assert_eq!(chord_to_arc(0.0, 0.0), Some(Angle::ZERO));
    }

    #[test]
    fn chord_longer_than_diameter_is_rejected() {
        assert_eq!(chord_to_arc(20.5, 10.0), None);
        assert_eq!(chord_to_arc(1.0, 0.0), None);
    }

    #[test]
    fn single_character_sits_on_center_angle() {
        for center in [0.0, 1.0, -2.5, 4.0, 7.0] {
            for winding in [Winding::Clockwise, Winding::CounterClockwise] {
                let text = layout_arc_text(
                    &Label::new("W"),
                    &ProportionalFont::default(),
                    60.0,
                    Angle::radians(center),
                    winding,
                )
                .unwrap();
                assert_eq!(text.glyphs.len(), 1);
                assert_eq!(text.glyphs[0].angle, Angle::radians(center));
            }
        }
    }

    #[test]
    fn span_equals_total_arc_and_is_symmetric() {
        let label = Label::new("Quarterly").with_font_size(12.0);
        let font = ProportionalFont::default();
        for winding in [Winding::Clockwise, Winding::CounterClockwise] {
            let text = layout_arc_text(&label, &font, 80.0, Angle::radians(1.2), winding).unwrap();
            let sum: f64 = text.glyphs.iter().map(|g| g.arc.raw()).sum();
            assert!((text.total_arc.raw() - sum).abs() < EPSILON);

            let first = text.glyphs.first().unwrap();
            let last = text.glyphs.last().unwrap();
            let d = winding.direction();
            let span = d * ((last.angle.raw() + d * last.arc.raw() / 2.0)
                - (first.angle.raw() - d * first.arc.raw() / 2.0));
            assert!((span - sum).abs() < EPSILON);

            let lead = d * (1.2 - (first.angle.raw() - d * first.arc.raw() / 2.0));
            let trail = d * ((last.angle.raw() + d * last.arc.raw() / 2.0) - 1.2);
            assert!((lead - trail).abs() < EPSILON);

            let (start, end) = text.extent();
            assert!((start.raw() - (first.angle.raw() - d * first.arc.raw() / 2.0)).abs() < EPSILON);
            assert!((end.raw() - (last.angle.raw() + d * last.arc.raw() / 2.0)).abs() < EPSILON);
        }
    }

    #[test]
    fn angles_are_monotonic_in_winding_direction() {
        let label = Label::new("abcdef");
        let ccw = layout_arc_text(&label, &mono(), 50.0, Angle::ZERO, Winding::CounterClockwise).unwrap();
        assert!(ccw.glyphs.windows(2).all(|w| w[1].angle > w[0].angle));

        let cw = layout_arc_text(&label, &mono(), 50.0, Angle::ZERO, Winding::Clockwise).unwrap();
        assert!(cw.glyphs.windows(2).all(|w| w[1].angle < w[0].angle));
    }

    #[test]
    fn rotation_adds_slant_correction() {
        let label = Label::new("ab");
        let ccw = layout_arc_text(&label, &mono(), 50.0, Angle::ZERO, Winding::CounterClockwise).unwrap();
        for g in &ccw.glyphs {
            assert!(((g.rotation - g.angle).raw() - FRAC_PI_2).abs() < EPSILON);
        }
        let cw = layout_arc_text(&label, &mono(), 50.0, Angle::ZERO, Winding::Clockwise).unwrap();
        for g in &cw.glyphs {
            assert!(((g.rotation - g.angle).raw() + FRAC_PI_2).abs() < EPSILON);
        }
    }

    #[test]
    fn spacing_widens_every_character() {
        let plain = layout_arc_text(&Label::new("abc"), &mono(), 50.0, Angle::ZERO, Winding::Clockwise).unwrap();
        let spaced = layout_arc_text(
            &Label::new("abc").with_spacing(2.0),
            &mono(),
            50.0,
            Angle::ZERO,
            Winding::Clockwise,
        )
        .unwrap();
        for (p, s) in plain.glyphs.iter().zip(&spaced.glyphs) {
            assert!((s.width - p.width - 2.0).abs() < EPSILON);
            assert!(s.arc > p.arc);
        }
    }

    #[test]
    fn empty_label_has_no_glyphs() {
        let text = layout_arc_text(&Label::new(""), &mono(), 50.0, Angle::ZERO, Winding::Clockwise).unwrap();
        assert!(text.glyphs.is_empty());
        assert_eq!(text.total_arc, Angle::ZERO);
    }

    #[test]
    fn glyph_wider_than_diameter_is_an_error() {
        // 15pt monospace at 0.5 advance is 7.5 wide; radius 3 allows 6
        let err = layout_arc_text(&Label::new("xy"), &mono(), 3.0, Angle::ZERO, Winding::Clockwise)
            .unwrap_err();
        assert_eq!(err, LayoutError::GlyphTooWide { ch: 'x', width: 7.5, radius: 3.0 });
    }

    #[test]
    fn non_finite_spacing_is_an_error() {
        let label = Label::new("ab").with_spacing(f64::INFINITY);
        let err = layout_arc_text(&label, &mono(), 50.0, Angle::ZERO, Winding::Clockwise).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Numeric { what: "label spacing", source: NumericError::Infinite }
        );
    }

    #[test]
    fn winding_by_bisector_half() {
        assert_eq!(Winding::for_bisector(Angle::radians(PI / 2.0)), Winding::CounterClockwise);
        assert_eq!(Winding::for_bisector(Angle::ZERO), Winding::CounterClockwise);
        assert_eq!(Winding::for_bisector(Angle::radians(PI)), Winding::CounterClockwise);
        assert_eq!(Winding::for_bisector(Angle::radians(3.0 * PI / 2.0)), Winding::Clockwise);
        // Bisectors past a full turn are reduced first
        assert_eq!(Winding::for_bisector(Angle::radians(TAU + PI / 2.0)), Winding::CounterClockwise);
        assert_eq!(Winding::for_bisector(Angle::radians(-PI / 2.0)), Winding::Clockwise);
    }

    #[test]
    fn upright_at_top_and_bottom() {
        // Screen bisector at 6 o'clock: label-frame angle is -π/2 and the
        // glyph must not be rotated on screen
        let bottom = Angle::radians(PI / 2.0);
        let winding = Winding::for_bisector(bottom);
        let text = layout_arc_text(&Label::new("x"), &mono(), 40.0, -bottom, winding).unwrap();
        let g = text.glyphs[0];
        assert!(g.screen_rotation().normalized().raw().abs() < EPSILON);
        let p = g.screen_position(DVec2::ZERO, 40.0);
        assert!((p - dvec2(0.0, 40.0)).length() < EPSILON);

        // 12 o'clock
        let top = Angle::radians(3.0 * PI / 2.0);
        let winding = Winding::for_bisector(top);
        let text = layout_arc_text(&Label::new("x"), &mono(), 40.0, -top, winding).unwrap();
        let g = text.glyphs[0];
        let r = g.screen_rotation().normalized().raw();
        assert!(r < EPSILON || TAU - r < EPSILON);
        let p = g.screen_position(DVec2::ZERO, 40.0);
        assert!((p - dvec2(0.0, -40.0)).length() < EPSILON);
    }

    #[test]
    fn reads_left_to_right_at_bottom() {
        let bottom = Angle::radians(PI / 2.0);
        let text = layout_arc_text(
            &Label::new("ab"),
            &mono(),
            40.0,
            -bottom,
            Winding::for_bisector(bottom),
        )
        .unwrap();
        let a = text.glyphs[0].screen_position(DVec2::ZERO, 40.0);
        let b = text.glyphs[1].screen_position(DVec2::ZERO, 40.0);
        assert!(a.x < b.x);
    }

    #[test]
    fn label_font_overrides_chart_font() {
        let chart_font = mono();
        let plain = layout_arc_text(&Label::new("ab"), &chart_font, 50.0, Angle::ZERO, Winding::Clockwise).unwrap();
        let wide = Label::new("ab").with_font(LabelFont::new(MonospaceFont::new(1.0)));
        let text = layout_arc_text(&wide, &chart_font, 50.0, Angle::ZERO, Winding::Clockwise).unwrap();
        assert!(text.total_arc > plain.total_arc);
        assert!((text.glyphs[0].width - Label::DEFAULT_FONT_SIZE).abs() < EPSILON);
    }
}
