// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke styles for the line layers an axis draws.

use kurbo::Join;
use peniko::Color;
use peniko::color::palette::css;
use smallvec::SmallVec;

/// A stroke description: color, width, dash pattern and line join.
///
/// An axis layer whose pen is `None` is not drawn at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in surface units.
    pub thickness: f64,
    /// Alternating dash/gap lengths. Empty means a solid line.
    pub dash_pattern: SmallVec<[f64; 4]>,
    /// How joined segments are rendered.
    pub line_join: Join,
}

impl Pen {
    /// Convenience for a solid pen.
    pub fn solid(color: Color, thickness: f64) -> Self {
        Self {
            color,
            thickness,
            dash_pattern: SmallVec::new(),
            line_join: Join::Miter,
        }
    }

    /// Sets the dash pattern.
    pub fn with_dashes(mut self, pattern: impl IntoIterator<Item = f64>) -> Self {
        self.dash_pattern = pattern.into_iter().collect();
        self
    }

    /// Sets the line join.
    pub fn with_join(mut self, line_join: Join) -> Self {
        self.line_join = line_join;
        self
    }

    /// Returns `true` if a dash pattern is set.
    pub fn is_dashed(&self) -> bool {
        !self.dash_pattern.is_empty()
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// The pens of every line layer an axis can draw.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisPens {
    /// Gridlines at major tick values. Also strokes the axis line when set.
    pub major_gridline: Option<Pen>,
    /// Gridlines at minor tick values.
    pub minor_gridline: Option<Pen>,
    /// Major tick marks.
    pub major_tick: Option<Pen>,
    /// Minor tick marks.
    pub minor_tick: Option<Pen>,
    /// The line through the data origin when the axis crosses at zero.
    pub zero_line: Option<Pen>,
    /// User-supplied reference lines.
    pub extra_gridline: Option<Pen>,
    /// The axis line, used when there is no major gridline pen.
    pub axis_line: Option<Pen>,
}

impl AxisPens {
    /// No layer is drawn.
    pub fn none() -> Self {
        Self {
            major_gridline: None,
            minor_gridline: None,
            major_tick: None,
            minor_tick: None,
            zero_line: None,
            extra_gridline: None,
            axis_line: None,
        }
    }

    /// Enables major and minor gridlines.
    pub fn with_gridlines(mut self, major: Pen, minor: Pen) -> Self {
        self.major_gridline = Some(major);
        self.minor_gridline = Some(minor);
        self
    }
}

impl Default for AxisPens {
    fn default() -> Self {
        let reference = Pen::solid(css::GRAY, 1.0);
        Self {
            major_gridline: None,
            minor_gridline: None,
            major_tick: Some(Pen::default()),
            minor_tick: Some(Pen::default()),
            zero_line: Some(reference.clone()),
            extra_gridline: Some(reference.with_dashes([4.0, 2.0])),
            axis_line: Some(Pen::default()),
        }
    }
}
