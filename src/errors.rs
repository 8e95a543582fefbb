//! Error types with diagnostics using miette
//!
//! Every error here is a configuration error: the data source handed the
//! layout engine something it cannot draw. None of them are retryable, and a
//! failed pass never produces a partial scene.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors that occur while laying out a chart
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid maximum radius {value}: {reason}")]
    #[diagnostic(
        code(wedgeplot::layout::invalid_max_radius),
        help("the maximum radius must be a finite value greater than zero")
    )]
    InvalidMaxRadius { value: f64, reason: NumericError },

    #[error("slice {index} has invalid radius fraction {value}: {reason}")]
    #[diagnostic(
        code(wedgeplot::layout::invalid_radius_fraction),
        help("radius fractions scale the maximum radius and must lie in [0, 1]")
    )]
    InvalidRadiusFraction {
        index: usize,
        value: f64,
        reason: NumericError,
    },

    #[error("character {ch:?} is {width} wide, too wide for an arc of radius {radius}")]
    #[diagnostic(
        code(wedgeplot::layout::glyph_too_wide),
        help("a character cannot be wider than the diameter of the arc it sits on")
    )]
    GlyphTooWide { ch: char, width: f64, radius: f64 },

    #[error("invalid viewport {width}x{height}")]
    #[diagnostic(code(wedgeplot::layout::invalid_viewport))]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid {what}: {source}")]
    #[diagnostic(code(wedgeplot::layout::invalid_value))]
    Numeric {
        what: &'static str,
        #[source]
        source: NumericError,
    },
}

impl LayoutError {
    pub(crate) fn numeric(what: &'static str) -> impl FnOnce(NumericError) -> LayoutError {
        move |source| LayoutError::Numeric { what, source }
    }
}
