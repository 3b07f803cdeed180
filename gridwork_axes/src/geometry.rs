// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space glue shared by the axis layers.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Maps axis-relative coordinates onto the screen.
///
/// `along` runs in the axis direction (the transformed data value), `across`
/// runs along the axis normal (e.g. the axis line coordinate plus a tick offset).
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisFrame {
    horizontal: bool,
    plot: Rect,
}

impl AxisFrame {
    pub(crate) fn new(horizontal: bool, plot: Rect) -> Self {
        Self { horizontal, plot }
    }

    pub(crate) fn point(&self, along: f64, across: f64) -> Point {
        if self.horizontal {
            Point::new(along, across)
        } else {
            Point::new(across, along)
        }
    }

    /// A line spanning the plot area at `along`.
    pub(crate) fn gridline(&self, along: f64) -> (Point, Point) {
        if self.horizontal {
            (
                Point::new(along, self.plot.y0),
                Point::new(along, self.plot.y1),
            )
        } else {
            (
                Point::new(self.plot.x0, along),
                Point::new(self.plot.x1, along),
            )
        }
    }

    /// The axis line at `across`, spanning the plot area.
    pub(crate) fn axis_line(&self, across: f64) -> (Point, Point) {
        if self.horizontal {
            (
                Point::new(self.plot.x0, across),
                Point::new(self.plot.x1, across),
            )
        } else {
            (
                Point::new(across, self.plot.y0),
                Point::new(across, self.plot.y1),
            )
        }
    }
}

/// Independent line segments, stored as the flat point list consumed by
/// [`DrawingSurface::draw_line_segments`](crate::DrawingSurface::draw_line_segments).
#[derive(Clone, Debug, Default)]
pub(crate) struct SegmentBatch {
    points: Vec<Point>,
}

impl SegmentBatch {
    pub(crate) fn push(&mut self, (p0, p1): (Point, Point)) {
        self.points.push(p0);
        self.points.push(p1);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    pub(crate) fn points(&self) -> &[Point] {
        &self.points
    }
}
