// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text styling and measurement hooks for axis labels and titles.
//!
//! Axis rendering needs three text-related things from its environment:
//! - a style to draw labels with (family, size, weight),
//! - the alignment of a label relative to its anchor point, and
//! - a way to measure text so axis thickness can be computed before drawing.
//!
//! This crate is intentionally:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - backend-agnostic (a shaping engine and a canvas-based measurer can both
//!   implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley), or
/// - backed by platform text measurement.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Font selection for drawing and measuring a label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in surface units (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Segoe UI"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Creates a named family.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }

    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);

    /// Returns `true` for weights of `600` and above.
    #[must_use]
    pub fn is_bold(self) -> bool {
        self.0 >= 600
    }
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Horizontal placement of text relative to its anchor point.
///
/// The discriminants form a signed tri-state so that alignments can be negated
/// and exchanged with [`VerticalAlign`] when a label is rotated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum HorizontalAlign {
    /// The anchor is at the left edge of the text.
    Left = -1,
    /// The anchor is at the horizontal centre of the text.
    Center = 0,
    /// The anchor is at the right edge of the text.
    Right = 1,
}

impl HorizontalAlign {
    /// Returns the signed tri-state value (`-1`, `0` or `1`).
    #[must_use]
    pub fn sign(self) -> i8 {
        self as i8
    }

    /// Builds an alignment from the sign of `sign`.
    #[must_use]
    pub fn from_sign(sign: i8) -> Self {
        match sign.signum() {
            -1 => Self::Left,
            0 => Self::Center,
            _ => Self::Right,
        }
    }
}

/// Vertical placement of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum VerticalAlign {
    /// The anchor is at the top edge of the text.
    Top = -1,
    /// The anchor is at the vertical middle of the text.
    Middle = 0,
    /// The anchor is at the bottom edge of the text.
    Bottom = 1,
}

impl VerticalAlign {
    /// Returns the signed tri-state value (`-1`, `0` or `1`).
    #[must_use]
    pub fn sign(self) -> i8 {
        self as i8
    }

    /// Builds an alignment from the sign of `sign`.
    #[must_use]
    pub fn from_sign(sign: i8) -> Self {
        match sign.signum() {
            -1 => Self::Top,
            0 => Self::Middle,
            _ => Self::Bottom,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of an empty string.
    pub const ZERO: Self = Self {
        advance_width: 0.0,
        ascent: 0.0,
        descent: 0.0,
        leading: 0.0,
    };

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em (~0.66em for bold weights) and
/// a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        let em = if style.font_weight.is_bold() {
            0.66
        } else {
            0.6
        };
        TextMetrics {
            advance_width: em * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn alignment_signs_round_trip_through_from_sign() {
        for h in [
            HorizontalAlign::Left,
            HorizontalAlign::Center,
            HorizontalAlign::Right,
        ] {
            assert_eq!(HorizontalAlign::from_sign(h.sign()), h);
        }
        assert_eq!(VerticalAlign::Top.sign(), -1);
        assert_eq!(VerticalAlign::Bottom.sign(), 1);
        assert_eq!(VerticalAlign::from_sign(-5), VerticalAlign::Top);
    }

    #[test]
    fn heuristic_measurer_scales_with_length_and_weight() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        let short = m.measure("10", &style);
        let long = m.measure("1000", &style);
        assert!((short.advance_width - 12.0).abs() < 1e-9);
        assert!(long.advance_width > short.advance_width);
        assert!((short.line_height() - 10.0).abs() < 1e-9);

        let bold = m.measure("10", &style.clone().with_weight(FontWeight::BOLD));
        assert!(bold.advance_width > short.advance_width);
        assert_eq!(m.measure("", &style), TextMetrics::ZERO);
    }

    #[test]
    fn named_family_reports_its_css_name() {
        assert_eq!(FontFamily::named("Inter").as_css_family(), "Inter");
        assert_eq!(FontFamily::Monospace.as_css_family(), "monospace");
    }
}
