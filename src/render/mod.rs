//! Scene consumers
//!
//! - `svg`: standalone SVG documents, used by the demos and tests

pub mod svg;

pub use self::svg::{SvgOptions, to_svg};
