//! Lay out a five-slice radar chart and print it as SVG.
//!
//! Run with: cargo run --example radar --features tracing > radar.svg
//! Pass a slice index to draw it selected.

use wedgeplot::render::{SvgOptions, to_svg};
use wedgeplot::{
    ChartDataSource, Color, Dash, DividerIcon, FillStyle, Label, LayoutOptions, ProportionalFont,
    Ring, Slice, StrokeStyle, Viewport,
};

struct Radar;

impl ChartDataSource for Radar {
    fn slice_count(&self) -> usize {
        5
    }

    fn ring_count(&self) -> usize {
        5
    }

    fn slice(&self, index: usize) -> Slice {
        let fraction = if index % 2 == 0 { 0.7 } else { 0.4 };
        let fraction = if index == 4 { 0.6 } else { fraction };
        Slice::new(fraction, Label::new(format!("Test {}", index + 1)).with_spacing(1.0))
            .with_stroke(StrokeStyle::new(Color::named("orange"), 0.8))
            .with_fill(FillStyle::new(Color::Rgb(255, 255, 0).with_alpha(0.3)))
    }

    fn ring(&self, index: usize) -> Ring {
        let dash = 20.0 / (index as f64 + 2.0);
        Ring::new(Label::new(format!("{}", 20 * (index + 1))).with_font_size(10.0))
            .with_stroke(StrokeStyle::new(Color::named("gray"), 1.0))
            .with_dash(Dash::new(dash, dash))
    }

    fn divider_icon(&self, index: usize) -> Option<DividerIcon> {
        (index % 2 == 0).then(|| DividerIcon::new("marker"))
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let selected = std::env::args().nth(1).and_then(|arg| arg.parse().ok());

    let viewport = Viewport::new(400.0, 400.0);
    let scene = wedgeplot::chart(&Radar, viewport, &LayoutOptions::default(), &ProportionalFont::default())?;
    tracing::info!(
        max_radius = scene.max_radius.raw(),
        label_radius = scene.label_radius,
        nodes = scene.nodes().len(),
        "radar laid out"
    );

    print!("{}", to_svg(&scene, &SvgOptions { selected }));
    Ok(())
}
