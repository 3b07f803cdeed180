// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis renderers.
//!
//! Every axis family renders through the same horizontal/vertical layout
//! routine. A family only decides which values it can place on screen and what
//! text a major tick gets; [`renderer_for`] picks the family for an
//! [`AxisKind`].
//!
//! The minor layer runs when the axis has tick marks or a minor gridline pen,
//! the major layer (gridlines, ticks and labels) when it has tick marks or a
//! major gridline pen.
//!
//! One render pass, in draw order:
//! - major tick labels,
//! - the zero line (zero-crossing axes only) and extra gridlines, one
//!   `draw_line` each,
//! - the title,
//! - four batched segment draws: minor gridlines, major gridlines (with the
//!   axis line), minor ticks, major ticks.
//!
//! Without a major gridline pen the axis line is drawn on its own, with the
//! axis line pen, in place of the major gridline batch. A layer without a pen,
//! or with nothing in it, issues no draw call.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use gridwork_text::{HorizontalAlign, VerticalAlign};
use hashbrown::HashSet;
use kurbo::Point;
use tracing::{debug, trace};

use crate::alignment::rotated_alignments;
use crate::axis::{Axis, AxisKind, AxisPosition, TickStyle};
use crate::geometry::{AxisFrame, SegmentBatch};
use crate::measure::measure_axis;
use crate::pen::Pen;
use crate::plot::PlotFrame;
use crate::surface::DrawingSurface;
use crate::ticks::tick_positions;
use crate::time;

/// Distance between the end of a major tick and its label.
pub const DEFAULT_TICK_LABEL_DISTANCE: f64 = 8.0;

/// Distance between the surface edge and an axis title.
pub const DEFAULT_TITLE_DISTANCE: f64 = 4.0;

/// Layout constants shared by all renderer families.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererConfig {
    /// Distance between the end of a major tick and its label.
    pub tick_label_distance: f64,
    /// Distance between the surface edge and an axis title.
    pub title_distance: f64,
}

impl RendererConfig {
    /// Sets the tick-to-label distance.
    pub fn with_tick_label_distance(mut self, distance: f64) -> Self {
        self.tick_label_distance = distance;
        self
    }

    /// Sets the edge-to-title distance.
    pub fn with_title_distance(mut self, distance: f64) -> Self {
        self.title_distance = distance;
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            tick_label_distance: DEFAULT_TICK_LABEL_DISTANCE,
            title_distance: DEFAULT_TITLE_DISTANCE,
        }
    }
}

/// Renders one axis onto a [`DrawingSurface`].
///
/// Implementations only hold read-only configuration, so one renderer can
/// draw any number of axes, in any order.
pub trait AxisRenderer: core::fmt::Debug {
    /// Layout constants.
    fn config(&self) -> &RendererConfig;

    /// Whether `value` can be placed on `axis`.
    fn is_plottable(&self, axis: &Axis, value: f64) -> bool {
        axis.is_within(value)
    }

    /// Where the label of the major tick at `tick` sits, in data space.
    fn label_value(&self, axis: &Axis, tick: f64) -> f64 {
        let _ = axis;
        tick
    }

    /// Label text for the data value `value`, with `step` the spacing of the
    /// major ticks. Empty text is not drawn.
    fn label_text(&self, axis: &Axis, value: f64, step: f64) -> String {
        axis.format_value_with_step(value, step)
    }

    /// Draws gridlines, ticks, labels, the axis line and the title of `axis`.
    ///
    /// `axis` must have its transform updated for `plot.plot_area`.
    fn render(&self, surface: &mut dyn DrawingSurface, plot: &PlotFrame<'_>, axis: &Axis) {
        render_horizontal_vertical(self, surface, plot, axis);
    }

    /// Thickness `axis` needs outside the plot area. See [`measure_axis`].
    fn measure(&self, surface: &dyn DrawingSurface, axis: &Axis) -> f64 {
        measure_axis(self, surface, axis)
    }
}

macro_rules! axis_renderer_struct {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name {
            config: RendererConfig,
        }

        impl $name {
            /// Creates a renderer with the given layout constants.
            pub fn new(config: RendererConfig) -> Self {
                Self { config }
            }
        }
    };
}

axis_renderer_struct!(
    /// Renders linear axes.
    LinearAxisRenderer
);
axis_renderer_struct!(
    /// Renders logarithmic axes. Non-positive values are skipped.
    LogarithmicAxisRenderer
);
axis_renderer_struct!(
    /// Renders date-time axes. Instants outside the representable calendar
    /// range are skipped.
    DateTimeAxisRenderer
);
axis_renderer_struct!(
    /// Renders category axes.
    ///
    /// Unless the axis centres its ticks, ticks mark category boundaries and
    /// each label sits half a category after its tick.
    CategoryAxisRenderer
);

impl AxisRenderer for LinearAxisRenderer {
    fn config(&self) -> &RendererConfig {
        &self.config
    }
}

impl AxisRenderer for LogarithmicAxisRenderer {
    fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn is_plottable(&self, axis: &Axis, value: f64) -> bool {
        value > 0.0 && axis.is_within(value)
    }
}

impl AxisRenderer for DateTimeAxisRenderer {
    fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn is_plottable(&self, axis: &Axis, value: f64) -> bool {
        axis.is_within(value) && time::timestamp(value).is_some()
    }
}

impl AxisRenderer for CategoryAxisRenderer {
    fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn label_value(&self, axis: &Axis, tick: f64) -> f64 {
        if axis.is_tick_centered {
            tick
        } else {
            tick + 0.5
        }
    }
}

/// Returns the renderer family for `kind`.
pub fn renderer_for(kind: AxisKind, config: RendererConfig) -> Box<dyn AxisRenderer> {
    match kind {
        AxisKind::Linear => Box::new(LinearAxisRenderer::new(config)),
        AxisKind::Logarithmic => Box::new(LogarithmicAxisRenderer::new(config)),
        AxisKind::DateTime => Box::new(DateTimeAxisRenderer::new(config)),
        AxisKind::Category => Box::new(CategoryAxisRenderer::new(config)),
    }
}

/// Exact membership test on the bit patterns of the major tick values.
#[derive(Debug, Default)]
struct MajorValueSet {
    bits: HashSet<u64>,
}

impl MajorValueSet {
    fn new(values: &[f64]) -> Self {
        Self {
            bits: values.iter().map(|v| key(*v)).collect(),
        }
    }

    fn contains(&self, value: f64) -> bool {
        self.bits.contains(&key(value))
    }
}

// `-0.0 == 0.0` for tick values, so both zeros share a key.
fn key(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

/// Whether the major layer (gridlines, ticks and labels) is drawn.
pub(crate) fn draws_major_layer(axis: &Axis) -> bool {
    axis.tick_style != TickStyle::None || axis.pens.major_gridline.is_some()
}

/// The screen coordinate of the axis line along the axis normal.
///
/// Zero-crossing axes sit where the perpendicular axis maps `0`; without a
/// perpendicular axis, or when it cannot place `0`, they stay on the plot edge.
fn axis_line_coordinate(plot: &PlotFrame<'_>, axis: &Axis) -> f64 {
    let edge = plot.edge(axis.position);
    if !axis.position_at_zero_crossing {
        return edge;
    }
    match plot.perpendicular_axis(axis.position) {
        Some(perpendicular) => {
            let crossing = perpendicular.transform(0.0);
            if crossing.is_finite() { crossing } else { edge }
        }
        None => edge,
    }
}

fn render_horizontal_vertical<R: AxisRenderer + ?Sized>(
    renderer: &R,
    surface: &mut dyn DrawingSurface,
    plot: &PlotFrame<'_>,
    axis: &Axis,
) {
    let config = renderer.config();
    let position = axis.position;
    let pens = &axis.pens;
    let frame = AxisFrame::new(position.is_horizontal(), plot.plot_area);
    let apos = axis_line_coordinate(plot, axis);
    let draw_ticks = axis.tick_style != TickStyle::None;
    let draw_majors = draws_major_layer(axis);

    let mut minor_gridlines = SegmentBatch::default();
    let mut minor_ticks = SegmentBatch::default();
    let mut major_gridlines = SegmentBatch::default();
    let mut major_ticks = SegmentBatch::default();

    if draw_ticks || pens.minor_gridline.is_some() {
        let span = tick_positions(axis.tick_style, axis.minor_tick_size, position);
        let majors = MajorValueSet::new(&axis.major_tick_values);
        for &value in &axis.minor_tick_values {
            if !renderer.is_plottable(axis, value) || majors.contains(value) {
                continue;
            }
            let t = axis.transform(value);
            if pens.minor_gridline.is_some() {
                minor_gridlines.push(frame.gridline(t));
            }
            if draw_ticks {
                minor_ticks.push((frame.point(t, apos + span.a0), frame.point(t, apos + span.a1)));
            }
        }
    }

    let mut labels = 0_usize;
    if draw_majors {
        let span = tick_positions(axis.tick_style, axis.major_tick_size, position);
        let (default_h, default_v) = position.default_label_alignment();
        let (h, v) = rotated_alignments(axis.angle, default_h, default_v);
        let label_across = apos + span.a1 + config.tick_label_distance * position.outward_sign();
        let step = axis.major_step();
        for &value in &axis.major_tick_values {
            if !renderer.is_plottable(axis, value) {
                continue;
            }
            let t = axis.transform(value);
            if pens.major_gridline.is_some() {
                major_gridlines.push(frame.gridline(t));
            }
            if draw_ticks {
                major_ticks.push((frame.point(t, apos + span.a0), frame.point(t, apos + span.a1)));
            }

            if value == 0.0 && axis.position_at_zero_crossing {
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
            let anchor = frame.point(axis.transform(label_value), label_across);
            surface.draw_text(anchor, &text, plot.text_color, &axis.font, axis.angle, h, v);
            labels += 1;
        }
    }

    if axis.position_at_zero_crossing {
        if let Some(pen) = &pens.zero_line {
            let t0 = axis.transform(0.0);
            if t0.is_finite() {
                let (p0, p1) = frame.gridline(t0);
                surface.draw_line(p0, p1, pen, true);
            }
        }
    }

    if let Some(pen) = &pens.extra_gridline {
        for &value in &axis.extra_gridlines {
            if !renderer.is_plottable(axis, value) {
                continue;
            }
            let (p0, p1) = frame.gridline(axis.transform(value));
            surface.draw_line(p0, p1, pen, true);
        }
    }

    let axis_line = frame.axis_line(apos);
    if pens.major_gridline.is_some() {
        major_gridlines.push(axis_line);
    }

    if let Some(title) = axis.visible_title() {
        draw_title(surface, plot, axis, config, title);
    }

    draw_batch(surface, "minor_gridlines", &minor_gridlines, pens.minor_gridline.as_ref());
    if pens.major_gridline.is_some() {
        draw_batch(surface, "major_gridlines", &major_gridlines, pens.major_gridline.as_ref());
    } else if let Some(pen) = &pens.axis_line {
        surface.draw_line(axis_line.0, axis_line.1, pen, true);
    }
    draw_batch(surface, "minor_ticks", &minor_ticks, pens.minor_tick.as_ref());
    draw_batch(surface, "major_ticks", &major_ticks, pens.major_tick.as_ref());

    debug!(
        position = ?position,
        kind = ?axis.kind,
        apos,
        labels,
        minor_ticks = minor_ticks.segment_count(),
        major_ticks = major_ticks.segment_count(),
        "rendered axis"
    );
}

fn draw_title(
    surface: &mut dyn DrawingSurface,
    plot: &PlotFrame<'_>,
    axis: &Axis,
    config: &RendererConfig,
    title: &str,
) {
    let (s0, s1) = axis.screen_span();
    let mut mid = (s0 + s1) / 2.0;
    if axis.position_at_zero_crossing {
        if let Some(perpendicular) = plot.perpendicular_axis(axis.position) {
            let far = perpendicular.transform(perpendicular.actual_maximum);
            if far.is_finite() {
                mid = far;
            }
        }
    }

    let d = config.title_distance;
    let (anchor, angle, vertical) = match axis.position {
        AxisPosition::Left => (Point::new(d, mid), -90.0, VerticalAlign::Top),
        AxisPosition::Right => (
            Point::new(surface.width() - d, mid),
            -90.0,
            VerticalAlign::Bottom,
        ),
        AxisPosition::Top => (Point::new(mid, d), 0.0, VerticalAlign::Top),
        AxisPosition::Bottom => (
            Point::new(mid, surface.height() - d),
            0.0,
            VerticalAlign::Bottom,
        ),
    };
    surface.draw_text(
        anchor,
        title,
        plot.text_color,
        &axis.font,
        angle,
        HorizontalAlign::Center,
        vertical,
    );
}

fn draw_batch(
    surface: &mut dyn DrawingSurface,
    layer: &'static str,
    batch: &SegmentBatch,
    pen: Option<&Pen>,
) {
    let Some(pen) = pen else {
        return;
    };
    if batch.is_empty() {
        return;
    }
    trace!(layer, segments = batch.segment_count(), "draw segment batch");
    surface.draw_line_segments(batch.points(), pen, true);
}
