// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing primitives an axis renderer issues.
//!
//! Backends (an SVG writer, a GPU scene builder, a recorder for tests) implement
//! [`DrawingSurface`]. The renderer never reads anything back except the surface
//! extents and text measurements.

use gridwork_text::{HorizontalAlign, TextStyle, VerticalAlign};
use kurbo::{Point, Size};
use peniko::Color;

use crate::pen::Pen;

/// A 2D drawing target.
pub trait DrawingSurface {
    /// Width of the surface in surface units.
    fn width(&self) -> f64;

    /// Height of the surface in surface units.
    fn height(&self) -> f64;

    /// Draws a single line from `p0` to `p1`.
    ///
    /// `aliased` requests pixel-snapped, non-antialiased rendering.
    fn draw_line(&mut self, p0: Point, p1: Point, pen: &Pen, aliased: bool);

    /// Draws independent segments `(points[2i], points[2i + 1])`.
    ///
    /// Implementations should make one call cheaper than `points.len() / 2`
    /// calls to [`draw_line`](Self::draw_line). A trailing unpaired point is
    /// ignored.
    fn draw_line_segments(&mut self, points: &[Point], pen: &Pen, aliased: bool);

    /// Draws one line of text anchored at `anchor`.
    ///
    /// The text is rotated by `rotation_degrees` (clockwise in screen space)
    /// around the anchor; the alignments say where the anchor sits on the
    /// unrotated text box.
    fn draw_text(
        &mut self,
        anchor: Point,
        text: &str,
        color: Color,
        style: &TextStyle,
        rotation_degrees: f64,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    );

    /// Returns the unrotated extent of `text`.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn draw_line(&mut self, p0: Point, p1: Point, pen: &Pen, aliased: bool) {
        (**self).draw_line(p0, p1, pen, aliased);
    }

    fn draw_line_segments(&mut self, points: &[Point], pen: &Pen, aliased: bool) {
        (**self).draw_line_segments(points, pen, aliased);
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
        (**self).draw_text(
            anchor,
            text,
            color,
            style,
            rotation_degrees,
            horizontal,
            vertical,
        );
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        (**self).measure_text(text, style)
    }
}
