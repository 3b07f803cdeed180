// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plot-level context an axis is rendered into.

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;

use crate::axis::{Axis, AxisPosition};

/// Read-only plot state shared by every axis of one frame.
#[derive(Clone, Copy, Debug)]
pub struct PlotFrame<'a> {
    /// The data area; gridlines span it and axis lines sit on its edges.
    pub plot_area: Rect,
    /// The default horizontal axis (perpendicular to `Left`/`Right` axes).
    pub default_x_axis: Option<&'a Axis>,
    /// The default vertical axis (perpendicular to `Top`/`Bottom` axes).
    pub default_y_axis: Option<&'a Axis>,
    /// Color of labels and titles.
    pub text_color: Color,
}

impl<'a> PlotFrame<'a> {
    /// A frame with no default axes and black text.
    pub fn new(plot_area: Rect) -> Self {
        Self {
            plot_area,
            default_x_axis: None,
            default_y_axis: None,
            text_color: css::BLACK,
        }
    }

    /// Sets the default axes used for zero crossing.
    pub fn with_axes(mut self, x: Option<&'a Axis>, y: Option<&'a Axis>) -> Self {
        self.default_x_axis = x;
        self.default_y_axis = y;
        self
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// The axis perpendicular to one placed at `position`.
    pub fn perpendicular_axis(&self, position: AxisPosition) -> Option<&'a Axis> {
        if position.is_horizontal() {
            self.default_y_axis
        } else {
            self.default_x_axis
        }
    }

    /// The plot edge an axis at `position` sits on, along the axis normal.
    pub fn edge(&self, position: AxisPosition) -> f64 {
        match position {
            AxisPosition::Left => self.plot_area.x0,
            AxisPosition::Right => self.plot_area.x1,
            AxisPosition::Top => self.plot_area.y0,
            AxisPosition::Bottom => self.plot_area.y1,
        }
    }
}
