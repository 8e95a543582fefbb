//! Polar layout of a chart snapshot
//!
//! This module is organized into submodules:
//! - `angles`: equal angular partition of a full turn
//! - `radial`: polar to Cartesian mapping and ring radii
//! - `arc_text`: glyph placement along a circular baseline
//! - `hit_test`: tapped point to slice index
//! - `defaults`: default sizes and settings
//! - `options`: viewport and layout configuration
//!
//! [`layout`] ties them together and produces a [`Scene`].

pub mod angles;
pub mod arc_text;
pub mod defaults;
pub mod options;
pub mod radial;

pub use angles::{CHART_ZERO, Sector, sector_angles};
pub use arc_text::{ArcText, Winding, layout_arc_text};
pub use hit_test::slice_index_at;
pub use options::{LayoutOptions, SelectionStyle, Viewport};
pub use radial::{RingScale, ring_radii, to_cartesian};

use glam::{DVec2, dvec2};

use crate::errors::LayoutError;
use crate::font::FontMetrics;
use crate::model::{ChartData, ChartDataSource};
use crate::scene::{
    Divider, IconPlacement, LabelRun, PlacedGlyph, RingGeometry, RingLabel, Scene, SceneNode,
    WedgeGeometry,
};
use crate::types::Length;

/// Lay out one snapshot of chart data.
///
/// Rings are laid out first because they settle the maximum radius every
/// wedge, label and divider is measured against. Any configuration error
/// aborts the whole pass; there is no partial scene.
pub fn layout(
    data: &ChartData,
    viewport: Viewport,
    options: &LayoutOptions,
    font: &dyn FontMetrics,
) -> Result<Scene, LayoutError> {
    let viewport = viewport.validate()?;
    let center = viewport.center();

    let requested = data
        .max_radius
        .unwrap_or_else(|| options.default_max_radius(viewport));
    let requested = Length::try_positive(requested).map_err(|reason| LayoutError::InvalidMaxRadius {
        value: requested,
        reason,
    })?;

    let scale = ring_radii(data.rings.len(), requested);
    let max_radius = scale.max_radius;
    let label_radius = (max_radius + options.slice_label_offset).raw();

    let mut nodes = Vec::with_capacity(data.rings.len() + 2 * data.slices.len());
    layout_rings(data, &scale, center, options, font, &mut nodes);

    let sectors = sector_angles(data.slices.len());
    for sector in &sectors {
        let wedge = layout_wedge(data, *sector, center, max_radius, label_radius, font)?;
        nodes.push(wedge.into());
    }
    for sector in &sectors {
        nodes.push(layout_divider(data, sector, center, max_radius, options).into());
    }

    if nodes.is_empty() {
        crate::log::debug!("nothing to lay out");
    }
    crate::log::debug!(
        slices = data.slices.len(),
        rings = data.rings.len(),
        requested = requested.raw(),
        max_radius = max_radius.raw(),
        "laid out chart"
    );

    Ok(Scene::new(viewport, max_radius, label_radius, options.selection.clone(), nodes))
}

fn layout_rings(
    data: &ChartData,
    scale: &RingScale,
    center: DVec2,
    options: &LayoutOptions,
    font: &dyn FontMetrics,
    nodes: &mut Vec<SceneNode>,
) {
    for (index, (ring, radius)) in data.rings.iter().zip(&scale.radii).enumerate() {
        let label = &ring.label;
        let metrics = label.metrics(font);
        let inset = options.ring_label_inset;
        let caption = RingLabel {
            text: label.text.clone(),
            color: label.color.clone(),
            font_size: label.font_size,
            origin: dvec2(center.x + inset, center.y - radius.raw() + inset),
            size: dvec2(
                metrics.text_width(&label.text, label.font_size, label.spacing),
                metrics.line_height(label.font_size),
            ),
        };
        crate::log::trace!(index, radius = radius.raw(), "ring");
        nodes.push(
            RingGeometry {
                index,
                center,
                radius: *radius,
                stroke: ring.stroke.clone(),
                fill: ring.fill.clone(),
                dash: ring.dash,
                label: caption,
            }
            .into(),
        );
    }
}

fn layout_wedge(
    data: &ChartData,
    sector: Sector,
    center: DVec2,
    max_radius: Length,
    label_radius: f64,
    font: &dyn FontMetrics,
) -> Result<WedgeGeometry, LayoutError> {
    let index = sector.index;
    let slice = &data.slices[index];
    let radius = max_radius * data.fraction(index)?;

    // Labels are laid out in the y-up label frame, where the screen
    // bisector is mirrored
    let bisector = sector.bisector();
    let winding = Winding::for_bisector(bisector);
    let text = layout_arc_text(&slice.label, font, label_radius, -bisector, winding)?;
    let glyphs = text
        .glyphs
        .iter()
        .map(|g| PlacedGlyph {
            ch: g.ch,
            width: g.width,
            angle: g.angle,
            rotation: g.rotation,
            position: g.screen_position(center, label_radius),
            screen_rotation: g.screen_rotation(),
        })
        .collect();

    crate::log::trace!(index, radius = radius.raw(), ?winding, "wedge");
    Ok(WedgeGeometry {
        index,
        center,
        radius,
        sector,
        start_point: to_cartesian(center, radius.raw(), sector.start),
        end_point: to_cartesian(center, radius.raw(), sector.end),
        stroke: slice.stroke.clone(),
        fill: slice.fill.clone(),
        label: LabelRun {
            text: slice.label.text.clone(),
            color: slice.label.color.clone(),
            font_size: slice.label.font_size,
            radius: label_radius,
            winding,
            total_arc: text.total_arc,
            glyphs,
        },
    })
}

fn layout_divider(
    data: &ChartData,
    sector: &Sector,
    center: DVec2,
    max_radius: Length,
    options: &LayoutOptions,
) -> Divider {
    let angle = sector.start;
    let icon = data.divider_icon(sector.index).map(|icon| IconPlacement {
        icon,
        center: to_cartesian(center, (max_radius + options.icon_offset).raw(), angle),
        size: options.icon_size,
        rotation: angle,
    });
    Divider {
        index: sector.index,
        angle,
        from: center,
        to: to_cartesian(center, max_radius.raw(), angle),
        stroke: options.divider.clone(),
        icon,
    }
}
