// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`DrawingSurface`] that records draw calls instead of rasterizing them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use gridwork_text::{HeuristicTextMeasurer, HorizontalAlign, TextMeasurer, TextStyle, VerticalAlign};
use kurbo::{Point, Size};
use peniko::Color;

use crate::pen::Pen;
use crate::surface::DrawingSurface;

/// A recorded text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    /// Anchor point.
    pub anchor: Point,
    /// Label text.
    pub text: String,
    /// Fill color.
    pub color: Color,
    /// Font.
    pub style: TextStyle,
    /// Rotation around the anchor, in degrees.
    pub rotation_degrees: f64,
    /// Horizontal anchor placement.
    pub horizontal: HorizontalAlign,
    /// Vertical anchor placement.
    pub vertical: VerticalAlign,
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A [`DrawingSurface::draw_line`] call.
    Line {
        /// Start point.
        p0: Point,
        /// End point.
        p1: Point,
        /// Stroke.
        pen: Pen,
        /// Aliasing hint.
        aliased: bool,
    },
    /// A [`DrawingSurface::draw_line_segments`] call.
    LineSegments {
        /// Flat list of segment endpoints.
        points: Vec<Point>,
        /// Stroke.
        pen: Pen,
        /// Aliasing hint.
        aliased: bool,
    },
    /// A [`DrawingSurface::draw_text`] call.
    Text(TextCommand),
}

/// Records every draw call in order.
///
/// Text is measured with `M`, by default [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct RecordingSurface<M = HeuristicTextMeasurer> {
    size: Size,
    measurer: M,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording of the given extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_measurer(width, height, HeuristicTextMeasurer)
    }
}

impl<M: TextMeasurer> RecordingSurface<M> {
    /// Creates an empty recording that measures text with `measurer`.
    pub fn with_measurer(width: f64, height: f64, measurer: M) -> Self {
        Self {
            size: Size::new(width, height),
            measurer,
            commands: Vec::new(),
        }
    }

    /// All recorded calls, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Takes the recorded calls, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Batched segment calls as `(points, pen)`.
    pub fn segment_batches(&self) -> impl Iterator<Item = (&[Point], &Pen)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::LineSegments { points, pen, .. } => Some((points.as_slice(), pen)),
            _ => None,
        })
    }

    /// Single line calls as `(p0, p1, pen)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, &Pen)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { p0, p1, pen, .. } => Some((*p0, *p1, pen)),
            _ => None,
        })
    }

    /// Text calls.
    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t),
            _ => None,
        })
    }
}

impl<M: TextMeasurer> DrawingSurface for RecordingSurface<M> {
    fn width(&self) -> f64 {
        self.size.width
    }

    fn height(&self) -> f64 {
        self.size.height
    }

    fn draw_line(&mut self, p0: Point, p1: Point, pen: &Pen, aliased: bool) {
        self.commands.push(DrawCommand::Line {
            p0,
            p1,
            pen: pen.clone(),
            aliased,
        });
    }

    fn draw_line_segments(&mut self, points: &[Point], pen: &Pen, aliased: bool) {
        self.commands.push(DrawCommand::LineSegments {
            points: points.to_vec(),
            pen: pen.clone(),
            aliased,
        });
    }

    fn draw_text(
        &mut self,
        anchor: Point,
        text: &str,
        color: Color,
        style: &TextStyle,
        rotation_degrees: f64,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) {
        self.commands.push(DrawCommand::Text(TextCommand {
            anchor,
            text: String::from(text),
            color,
            style: style.clone(),
            rotation_degrees,
            horizontal,
            vertical,
        }));
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        let m = self.measurer.measure(text, style);
        Size::new(m.advance_width, m.line_height())
    }
}
