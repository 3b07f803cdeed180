// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis rendering for 2D plots.
//!
//! This crate turns an already-computed [`Axis`] (actual bounds, major and
//! minor tick values, a data-to-screen transform) into draw calls on a
//! [`DrawingSurface`]:
//! - gridlines and tick marks, batched per layer,
//! - rotated tick labels with alignment snapped to quarter turns,
//! - the axis line (optionally through the origin of the perpendicular axis),
//! - zero and extra reference lines, and the title.
//!
//! Choosing tick values is left to the caller. Renderers are picked per
//! [`AxisKind`] with [`renderer_for`]:
//!
//! ```
//! use gridwork_axes::{
//!     Axis, AxisPosition, PlotFrame, RecordingSurface, RendererConfig, renderer_for,
//! };
//! use kurbo::Rect;
//!
//! let plot = Rect::new(40.0, 10.0, 240.0, 110.0);
//! let mut axis = Axis::linear(AxisPosition::Bottom)
//!     .with_range(0.0, 10.0)
//!     .with_major_ticks([0.0, 5.0, 10.0]);
//! axis.update_transform(plot);
//!
//! let mut surface = RecordingSurface::new(260.0, 140.0);
//! renderer_for(axis.kind, RendererConfig::default())
//!     .render(&mut surface, &PlotFrame::new(plot), &axis);
//! assert_eq!(surface.texts().count(), 3);
//! ```

#![no_std]

extern crate alloc;

mod alignment;
mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod measure;
mod pen;
mod plot;
mod recording;
mod renderer;
mod scale;
#[cfg(test)]
mod scenario_tests;
mod surface;
mod ticks;
mod time;

pub use alignment::rotated_alignments;
pub use axis::{Axis, AxisKind, AxisPosition, LabelFormatter, TickStyle};
pub use format::{format_tick_with_step, tick_step};
pub use gridwork_text::{HorizontalAlign, TextStyle, VerticalAlign};
pub use measure::measure_axis;
pub use pen::{AxisPens, Pen};
pub use plot::PlotFrame;
pub use recording::{DrawCommand, RecordingSurface, TextCommand};
pub use renderer::{
    AxisRenderer, CategoryAxisRenderer, DEFAULT_TICK_LABEL_DISTANCE, DEFAULT_TITLE_DISTANCE,
    DateTimeAxisRenderer, LinearAxisRenderer, LogarithmicAxisRenderer, RendererConfig,
    renderer_for,
};
pub use scale::{LinearTransform, LogTransform, ScreenTransform};
pub use surface::DrawingSurface;
pub use ticks::{TickSpan, tick_positions};
pub use time::{default_time_pattern, format_timestamp, timestamp};
