//! Font metrics used to measure label characters
//!
//! The layout engine never rasterises text. It only needs each character's
//! advance width (to turn it into an arc) and a line height (to size the
//! straight ring labels). Hosts with a real text stack implement
//! [`FontMetrics`] over it; [`ProportionalFont`] is a dependency-free
//! approximation good enough for SVG output and tests.

use std::fmt;
use std::sync::Arc;

/// Measures characters at a given font size.
pub trait FontMetrics {
    /// Advance width of `ch` at `font_size`
    fn char_width(&self, ch: char, font_size: f64) -> f64;

    /// Height of one line of text at `font_size`
    fn line_height(&self, font_size: f64) -> f64 {
        font_size * 1.2
    }

    /// Width of `text` with `spacing` of extra tracking after every character.
    fn text_width(&self, text: &str, font_size: f64, spacing: f64) -> f64 {
        text.chars()
            .map(|ch| self.char_width(ch, font_size) + spacing)
            .sum()
    }
}

impl<F: FontMetrics + ?Sized> FontMetrics for &F {
    fn char_width(&self, ch: char, font_size: f64) -> f64 {
        (**self).char_width(ch, font_size)
    }

    fn line_height(&self, font_size: f64) -> f64 {
        (**self).line_height(font_size)
    }
}

/// Relative advance widths of printable ASCII (`' '..='~'`), in hundredths
/// of an average character.
#[rustfmt::skip]
const ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Width used for anything outside printable ASCII
const NON_ASCII_ADVANCE: u8 = 100;

/// Proportional sans-serif approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalFont {
    /// Width of an average (100) character as a fraction of the font size
    pub average_advance: f64,
}

impl Default for ProportionalFont {
    fn default() -> Self {
        Self { average_advance: 0.6 }
    }
}

impl ProportionalFont {
    fn hundredths(ch: char) -> u8 {
        if (' '..='~').contains(&ch) {
            ADVANCE[(ch as usize) - 0x20]
        } else {
            NON_ASCII_ADVANCE
        }
    }
}

impl FontMetrics for ProportionalFont {
    fn char_width(&self, ch: char, font_size: f64) -> f64 {
        Self::hundredths(ch) as f64 * 0.01 * self.average_advance * font_size
    }
}

/// Every character has the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceFont {
    /// Advance as a fraction of the font size
    pub advance: f64,
}

impl MonospaceFont {
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl FontMetrics for MonospaceFont {
    fn char_width(&self, _ch: char, font_size: f64) -> f64 {
        self.advance * font_size
    }
}

/// Shared font handle a single [`Label`](crate::model::Label) can carry to
/// override the chart-wide metrics.
///
/// Two handles are equal when they point at the same metrics.
#[derive(Clone)]
pub struct LabelFont(Arc<dyn FontMetrics + Send + Sync>);

impl LabelFont {
    pub fn new(metrics: impl FontMetrics + Send + Sync + 'static) -> Self {
        Self(Arc::new(metrics))
    }
}

impl FontMetrics for LabelFont {
    fn char_width(&self, ch: char, font_size: f64) -> f64 {
        self.0.char_width(ch, font_size)
    }

    fn line_height(&self, font_size: f64) -> f64 {
        self.0.line_height(font_size)
    }
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LabelFont(..)")
    }
}

impl PartialEq for LabelFont {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
