// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis model consumed by the renderers.
//!
//! An [`Axis`] is a read-only description of one axis for a single frame: its
//! placement, its actual data bounds, the already-computed major and minor tick
//! values, its styling, and a monotonic data-to-screen transform. Choosing tick
//! values is up to the caller.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use gridwork_text::{HorizontalAlign, TextStyle, VerticalAlign};
use kurbo::Rect;

use crate::format::{format_tick_with_step, tick_step};
use crate::pen::AxisPens;
use crate::scale::{LinearTransform, LogTransform, ScreenTransform};
use crate::time::{default_time_pattern, format_timestamp};

/// Which side of the plot area an axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    /// A vertical axis left of the plot area.
    Left,
    /// A vertical axis right of the plot area.
    Right,
    /// A horizontal axis above the plot area.
    Top,
    /// A horizontal axis below the plot area.
    Bottom,
}

impl AxisPosition {
    /// Returns `true` for `Top` and `Bottom`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The screen direction pointing away from the plot area along the axis
    /// normal: `-1` for `Left`/`Top`, `+1` for `Right`/`Bottom`.
    pub fn outward_sign(self) -> f64 {
        match self {
            Self::Left | Self::Top => -1.0,
            Self::Right | Self::Bottom => 1.0,
        }
    }

    /// Tick label alignment before rotation is applied.
    pub fn default_label_alignment(self) -> (HorizontalAlign, VerticalAlign) {
        match self {
            Self::Left => (HorizontalAlign::Right, VerticalAlign::Middle),
            Self::Right => (HorizontalAlign::Left, VerticalAlign::Middle),
            Self::Top => (HorizontalAlign::Center, VerticalAlign::Bottom),
            Self::Bottom => (HorizontalAlign::Center, VerticalAlign::Top),
        }
    }
}

/// The value domain of an axis. Selects the renderer family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Continuous values, linear mapping.
    Linear,
    /// Positive continuous values, logarithmic mapping.
    Logarithmic,
    /// Seconds since the Unix epoch, linear mapping.
    DateTime,
    /// Category indices `0..n`, linear mapping.
    Category,
}

/// Where tick marks sit relative to the axis line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickStyle {
    /// No tick marks.
    None,
    /// Ticks point into the plot area.
    Inside,
    /// Ticks point away from the plot area.
    Outside,
    /// Ticks straddle the axis line.
    Crossing,
}

/// A label formatter: data value to label text.
pub type LabelFormatter = Arc<dyn Fn(f64) -> String>;

/// One axis, as seen by a renderer for a single frame.
#[derive(Clone)]
pub struct Axis {
    /// Placement relative to the plot area.
    pub position: AxisPosition,
    /// Value domain.
    pub kind: AxisKind,
    /// Smallest visible data value.
    pub actual_minimum: f64,
    /// Largest visible data value.
    pub actual_maximum: f64,
    /// Fraction of the plot span where `actual_minimum` sits (default `0`).
    pub start_position: f64,
    /// Fraction of the plot span where `actual_maximum` sits (default `1`).
    pub end_position: f64,
    /// Whether the screen direction is flipped.
    pub is_reversed: bool,
    /// Draw the axis through the origin of the perpendicular axis.
    pub position_at_zero_crossing: bool,
    /// Tick label rotation in degrees, within `[-180, 180]`.
    pub angle: f64,
    /// Tick mark placement.
    pub tick_style: TickStyle,
    /// Length of major tick marks.
    pub major_tick_size: f64,
    /// Length of minor tick marks.
    pub minor_tick_size: f64,
    /// Axis title. Blank titles are not drawn.
    pub title: Option<String>,
    /// User reference lines, independent of the ticks.
    pub extra_gridlines: Vec<f64>,
    /// Ordered major tick values.
    pub major_tick_values: Vec<f64>,
    /// Ordered minor tick values. Values also present in
    /// [`major_tick_values`](Self::major_tick_values) are never drawn as minors.
    pub minor_tick_values: Vec<f64>,
    /// Font for tick labels and the title.
    pub font: TextStyle,
    /// Pens for each line layer.
    pub pens: AxisPens,
    /// Optional custom label formatter.
    pub label_formatter: Option<LabelFormatter>,
    /// Logarithm base for [`AxisKind::Logarithmic`].
    pub log_base: f64,
    /// Labels for [`AxisKind::Category`], indexed by value.
    pub categories: Vec<String>,
    /// For categories: ticks sit on category centres instead of between them.
    pub is_tick_centered: bool,
    /// For date-times: `strftime`-style label pattern.
    pub date_format: Option<String>,
    screen_range: (f64, f64),
}

impl core::fmt::Debug for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Axis")
            .field("position", &self.position)
            .field("kind", &self.kind)
            .field("actual_minimum", &self.actual_minimum)
            .field("actual_maximum", &self.actual_maximum)
            .field("start_position", &self.start_position)
            .field("end_position", &self.end_position)
            .field("is_reversed", &self.is_reversed)
            .field("position_at_zero_crossing", &self.position_at_zero_crossing)
            .field("angle", &self.angle)
            .field("tick_style", &self.tick_style)
            .field("major_tick_size", &self.major_tick_size)
            .field("minor_tick_size", &self.minor_tick_size)
            .field("title", &self.title)
            .field("extra_gridlines", &self.extra_gridlines)
            .field("major_tick_values", &self.major_tick_values)
            .field("minor_tick_values", &self.minor_tick_values)
            .field("font", &self.font)
            .field("pens", &self.pens)
            .field("label_formatter", &self.label_formatter.is_some())
            .field("log_base", &self.log_base)
            .field("categories", &self.categories)
            .field("is_tick_centered", &self.is_tick_centered)
            .field("date_format", &self.date_format)
            .field("screen_range", &self.screen_range)
            .finish()
    }
}

impl Axis {
    /// Creates an axis with default styling over `[0, 1]` and no ticks.
    ///
    /// Defaults: outside ticks of size 7 (major) and 4 (minor), 12px
    /// sans-serif labels, [`AxisPens::default`], no title.
    pub fn new(position: AxisPosition, kind: AxisKind) -> Self {
        Self {
            position,
            kind,
            actual_minimum: 0.0,
            actual_maximum: 1.0,
            start_position: 0.0,
            end_position: 1.0,
            is_reversed: false,
            position_at_zero_crossing: false,
            angle: 0.0,
            tick_style: TickStyle::Outside,
            major_tick_size: 7.0,
            minor_tick_size: 4.0,
            title: None,
            extra_gridlines: Vec::new(),
            major_tick_values: Vec::new(),
            minor_tick_values: Vec::new(),
            font: TextStyle::new(12.0),
            pens: AxisPens::default(),
            label_formatter: None,
            log_base: 10.0,
            categories: Vec::new(),
            is_tick_centered: false,
            date_format: None,
            screen_range: (0.0, 1.0),
        }
    }

    /// A linear axis.
    pub fn linear(position: AxisPosition) -> Self {
        Self::new(position, AxisKind::Linear)
    }

    /// A base-10 logarithmic axis over `[1, 10]`.
    pub fn logarithmic(position: AxisPosition) -> Self {
        Self::new(position, AxisKind::Logarithmic).with_range(1.0, 10.0)
    }

    /// A date-time axis (values are seconds since the Unix epoch).
    pub fn date_time(position: AxisPosition) -> Self {
        Self::new(position, AxisKind::DateTime)
    }

    /// A category axis whose range covers every label with half a category
    /// of padding on both ends.
    pub fn category<S: Into<String>>(
        position: AxisPosition,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        let categories: Vec<String> = labels.into_iter().map(Into::into).collect();
        let n = categories.len() as f64;
        Self {
            categories,
            ..Self::new(position, AxisKind::Category).with_range(-0.5, n - 0.5)
        }
    }

    /// Sets the actual data range.
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        debug_assert!(
            minimum <= maximum,
            "axis minimum must not exceed its maximum; use `with_reversed` to flip"
        );
        self.actual_minimum = minimum;
        self.actual_maximum = maximum;
        self
    }

    /// Sets the fractional screen span covered by the axis.
    pub fn with_span(mut self, start_position: f64, end_position: f64) -> Self {
        self.start_position = start_position;
        self.end_position = end_position;
        self
    }

    /// Flips the screen direction.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.is_reversed = reversed;
        self
    }

    /// Draws the axis through the origin of the perpendicular axis.
    pub fn with_zero_crossing(mut self, zero_crossing: bool) -> Self {
        self.position_at_zero_crossing = zero_crossing;
        self
    }

    /// Sets the tick label rotation in degrees.
    pub fn with_angle(mut self, angle_degrees: f64) -> Self {
        self.angle = angle_degrees;
        self
    }

    /// Sets the tick style.
    pub fn with_tick_style(mut self, tick_style: TickStyle) -> Self {
        self.tick_style = tick_style;
        self
    }

    /// Sets major and minor tick sizes.
    pub fn with_tick_sizes(mut self, major: f64, minor: f64) -> Self {
        self.major_tick_size = major;
        self.minor_tick_size = minor;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the extra reference lines.
    pub fn with_extra_gridlines(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.extra_gridlines = values.into_iter().collect();
        self
    }

    /// Sets the major tick values.
    pub fn with_major_ticks(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.major_tick_values = values.into_iter().collect();
        self
    }

    /// Sets the minor tick values.
    pub fn with_minor_ticks(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.minor_tick_values = values.into_iter().collect();
        self
    }

    /// Sets the label and title font.
    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Sets the pens.
    pub fn with_pens(mut self, pens: AxisPens) -> Self {
        self.pens = pens;
        self
    }

    /// Sets a custom label formatter.
    pub fn with_label_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.label_formatter = Some(Arc::new(f));
        self
    }

    /// Sets the logarithm base.
    pub fn with_log_base(mut self, base: f64) -> Self {
        self.log_base = base;
        self
    }

    /// Places category ticks on category centres.
    pub fn with_tick_centered(mut self, centered: bool) -> Self {
        self.is_tick_centered = centered;
        self
    }

    /// Sets the date-time label pattern.
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }

    /// Recomputes the screen mapping for `plot_area`.
    ///
    /// Horizontal axes grow rightwards from `plot_area.x0`; vertical axes grow
    /// upwards from `plot_area.y1`.
    pub fn update_transform(&mut self, plot_area: Rect) {
        let (mut a, mut b) = if self.position.is_horizontal() {
            let w = plot_area.width();
            (
                plot_area.x0 + self.start_position * w,
                plot_area.x0 + self.end_position * w,
            )
        } else {
            let h = plot_area.height();
            (
                plot_area.y1 - self.start_position * h,
                plot_area.y1 - self.end_position * h,
            )
        };
        if self.is_reversed {
            core::mem::swap(&mut a, &mut b);
        }
        self.screen_range = (a, b);
    }

    /// Returns the current data-to-screen mapping.
    pub fn screen_transform(&self) -> ScreenTransform {
        let domain = (self.actual_minimum, self.actual_maximum);
        match self.kind {
            AxisKind::Logarithmic => ScreenTransform::Log(LogTransform::with_base(
                domain,
                self.screen_range,
                self.log_base,
            )),
            AxisKind::Linear | AxisKind::DateTime | AxisKind::Category => {
                ScreenTransform::Linear(LinearTransform::new(domain, self.screen_range))
            }
        }
    }

    /// Maps a data value to a screen coordinate.
    pub fn transform(&self, value: f64) -> f64 {
        self.screen_transform().map(value)
    }

    /// Maps a screen coordinate to a data value.
    pub fn inverse_transform(&self, coordinate: f64) -> f64 {
        self.screen_transform().invert(coordinate)
    }

    /// Screen coordinates of `(actual_minimum, actual_maximum)`.
    pub fn screen_span(&self) -> (f64, f64) {
        (
            self.transform(self.actual_minimum),
            self.transform(self.actual_maximum),
        )
    }

    /// Inclusive range test against the actual bounds.
    pub fn is_within(&self, value: f64) -> bool {
        value >= self.actual_minimum && value <= self.actual_maximum
    }

    /// Returns a non-blank title.
    pub fn visible_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Smallest spacing between the major tick values; `0` for fewer than two.
    pub fn major_step(&self) -> f64 {
        tick_step(&self.major_tick_values)
    }

    /// Formats a value as label text.
    ///
    /// Uses the custom formatter if set; otherwise numbers for linear and log
    /// axes, dates for date-time axes, and category names for category axes.
    pub fn format_value(&self, value: f64) -> String {
        self.format_value_with_step(value, self.major_step())
    }

    /// [`Axis::format_value`] with the major tick spacing supplied by the
    /// caller, so a labelling pass computes it once.
    pub fn format_value_with_step(&self, value: f64, step: f64) -> String {
        if let Some(f) = &self.label_formatter {
            return f(value);
        }
        match self.kind {
            AxisKind::Linear => format_tick_with_step(value, step),
            AxisKind::Logarithmic => format_tick_with_step(value, 0.0),
            AxisKind::DateTime => {
                let pattern = match &self.date_format {
                    Some(p) => p.as_str(),
                    None => default_time_pattern(step),
                };
                format_timestamp(value, pattern)
            }
            AxisKind::Category => self.category_label(value).unwrap_or_default(),
        }
    }

    fn category_label(&self, value: f64) -> Option<String> {
        if !value.is_finite() {
            return None;
        }
        let index = value.round();
        if index < 0.0 || index >= self.categories.len() as f64 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "bounded by the category count"
        )]
        let index = index as usize;
        self.categories.get(index).cloned()
    }
}
