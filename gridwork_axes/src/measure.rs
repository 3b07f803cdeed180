// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis thickness for a measure/arrange layout pass.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::axis::Axis;
use crate::renderer::{AxisRenderer, draws_major_layer};
use crate::surface::DrawingSurface;
use crate::ticks::tick_positions;

/// Measures the thickness `axis` needs outside the plot area, along its normal.
///
/// The result covers the outward part of the major ticks, the tick-to-label
/// distance plus the largest rotated label, and the title (line height plus
/// the title distance). Labels are produced exactly as `renderer` would draw
/// them, so families that skip or relabel values measure what they render,
/// and an axis without tick marks or a major gridline pen has no labels.
pub fn measure_axis<R: AxisRenderer + ?Sized>(
    renderer: &R,
    surface: &dyn DrawingSurface,
    axis: &Axis,
) -> f64 {
    let config = renderer.config();
    let position = axis.position;
    let span = tick_positions(axis.tick_style, axis.major_tick_size, position);
    let tick_extent = span.outward_extent(position);

    let theta = axis.angle.to_radians();
    let sin = theta.sin().abs();
    let cos = theta.cos().abs();
    let mut max_label_extent = None::<f64>;
    let labelled: &[f64] = if draws_major_layer(axis) {
        &axis.major_tick_values
    } else {
        &[]
    };
    let step = axis.major_step();
    for &value in labelled {
        if !renderer.is_plottable(axis, value) || (value == 0.0 && axis.position_at_zero_crossing)
        {
            continue;
        }
        let label_value = renderer.label_value(axis, value);
        if !renderer.is_plottable(axis, label_value) {
            continue;
        }
        let text = renderer.label_text(axis, label_value, step);
        if text.is_empty() {
            continue;
        }
        let size = surface.measure_text(&text, &axis.font);
        let extent = if position.is_horizontal() {
            sin * size.width + cos * size.height
        } else {
            cos * size.width + sin * size.height
        };
        max_label_extent = Some(max_label_extent.map_or(extent, |m| m.max(extent)));
    }

    let label_thickness = max_label_extent.map_or(0.0, |extent| {
        span.a1 * position.outward_sign() + config.tick_label_distance + extent
    });
    let mut out = tick_extent.max(label_thickness);
    if let Some(title) = axis.visible_title() {
        let size = surface.measure_text(title, &axis.font);
        out += config.title_distance + size.height;
    }
    out
}
