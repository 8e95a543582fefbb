//! Polar chart layout
//!
//! `wedgeplot` turns a pull-based chart description (slices whose radius
//! encodes a value, concentric reference rings, optional divider icons) into
//! an immutable [`Scene`] of positioned geometry: ring circles, wedges,
//! divider lines and per-character placements for labels that follow the
//! chart's outer arc. Drawing is left to the host; [`render::svg`] is a
//! reference consumer.
//!
//! ```
//! use wedgeplot::{ChartData, Label, LayoutOptions, ProportionalFont, Ring, Slice, Viewport};
//!
//! let data = ChartData::new()
//!     .with_slice(Slice::new(0.7, Label::new("North")))
//!     .with_slice(Slice::new(0.4, Label::new("South")))
//!     .with_ring(Ring::new(Label::new("50")))
//!     .with_ring(Ring::new(Label::new("100")));
//!
//! let scene = wedgeplot::chart(&data, Viewport::square(300.0), &LayoutOptions::default(), &ProportionalFont::default())?;
//! assert_eq!(scene.slice_count(), 2);
//! assert_eq!(scene.slice_at(scene.center + glam::dvec2(10.0, -1.0)), Some(0));
//! # Ok::<(), miette::Report>(())
//! ```

pub mod errors;
pub mod font;
pub mod layout;
pub mod log;
pub mod model;
pub mod render;
pub mod scene;
pub mod types;

pub use errors::LayoutError;
pub use font::{FontMetrics, LabelFont, MonospaceFont, ProportionalFont};
pub use layout::{LayoutOptions, SelectionStyle, Viewport};
pub use model::{ChartData, ChartDataSource, Dash, DividerIcon, FillStyle, Label, Ring, Slice, StrokeStyle};
pub use scene::{Scene, SceneNode};
pub use types::{Angle, Color, Fraction, Length};

/// Snapshot `source` and lay it out in `viewport`.
///
/// The data source is queried once per item up front; layout never calls back
/// into it.
pub fn chart(
    source: &dyn ChartDataSource,
    viewport: Viewport,
    options: &LayoutOptions,
    font: &dyn FontMetrics,
) -> Result<Scene, miette::Report> {
    let data = ChartData::snapshot(source);
    let scene = layout::layout(&data, viewport, options, font)?;
    Ok(scene)
}
