// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An SVG [`DrawingSurface`] for `gridwork_demo`.

use std::fmt::Write as _;

use gridwork_axes::{DrawingSurface, HorizontalAlign, Pen, TextStyle, VerticalAlign};
use gridwork_text::TextMeasurer;
use kurbo::{Point, Size};
use peniko::Color;

/// Writes draw calls as SVG elements.
///
/// Segment batches become one `<path>` each.
pub(crate) struct SvgSurface<'m> {
    size: Size,
    measurer: &'m dyn TextMeasurer,
    body: String,
}

impl std::fmt::Debug for SvgSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgSurface")
            .field("size", &self.size)
            .field("body_len", &self.body.len())
            .finish_non_exhaustive()
    }
}

impl<'m> SvgSurface<'m> {
    pub(crate) fn new(width: f64, height: f64, measurer: &'m dyn TextMeasurer) -> Self {
        Self {
            size: Size::new(width, height),
            measurer,
            body: String::new(),
        }
    }

    /// Outlines `rect`; used to show the plot area.
    pub(crate) fn frame(&mut self, rect: kurbo::Rect, color: Color) {
        let (stroke, opacity) = svg_paint(color);
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{stroke}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        if let Some(o) = opacity {
            let _ = write!(self.body, r#" stroke-opacity="{o}""#);
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn write_stroke(&mut self, pen: &Pen, aliased: bool) {
        let (stroke, opacity) = svg_paint(pen.color);
        let _ = write!(
            self.body,
            r#" fill="none" stroke="{stroke}" stroke-width="{}""#,
            pen.thickness
        );
        if let Some(o) = opacity {
            let _ = write!(self.body, r#" stroke-opacity="{o}""#);
        }
        if pen.is_dashed() {
            let dashes: Vec<String> = pen.dash_pattern.iter().map(|d| format!("{d}")).collect();
            let _ = write!(self.body, r#" stroke-dasharray="{}""#, dashes.join(" "));
        }
        let join = match pen.line_join {
            kurbo::Join::Bevel => "bevel",
            kurbo::Join::Miter => "miter",
            kurbo::Join::Round => "round",
        };
        let _ = write!(self.body, r#" stroke-linejoin="{join}""#);
        if aliased {
            self.body.push_str(r#" shape-rendering="crispEdges""#);
        }
    }
}

impl DrawingSurface for SvgSurface<'_> {
    fn width(&self) -> f64 {
        self.size.width
    }

    fn height(&self) -> f64 {
        self.size.height
    }

    fn draw_line(&mut self, p0: Point, p1: Point, pen: &Pen, aliased: bool) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            p0.x, p0.y, p1.x, p1.y
        );
        self.write_stroke(pen, aliased);
        self.body.push_str("/>\n");
    }

    fn draw_line_segments(&mut self, points: &[Point], pen: &Pen, aliased: bool) {
        let mut d = String::new();
        for pair in points.chunks_exact(2) {
            let _ = write!(
                d,
                "M{} {}L{} {}",
                pair[0].x, pair[0].y, pair[1].x, pair[1].y
            );
        }
        if d.is_empty() {
            return;
        }
        let _ = write!(self.body, r#"<path d="{d}""#);
        self.write_stroke(pen, aliased);
        self.body.push_str("/>\n");
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
        let text_anchor = match horizontal {
            HorizontalAlign::Left => "start",
            HorizontalAlign::Center => "middle",
            HorizontalAlign::Right => "end",
        };
        let baseline = match vertical {
            VerticalAlign::Top => "hanging",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "alphabetic",
        };
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="{text_anchor}" dominant-baseline="{baseline}""#,
            anchor.x,
            anchor.y,
            style.font_size,
            escape_xml(style.font_family.as_css_family()),
        );
        if style.font_weight.is_bold() {
            let _ = write!(self.body, r#" font-weight="{}""#, style.font_weight.0);
        }
        if rotation_degrees != 0.0 {
            let _ = write!(
                self.body,
                r#" transform="rotate({rotation_degrees} {} {})""#,
                anchor.x, anchor.y
            );
        }
        let (fill, opacity) = svg_paint(color);
        let _ = write!(self.body, r#" fill="{fill}""#);
        if let Some(o) = opacity {
            let _ = write!(self.body, r#" fill-opacity="{o}""#);
        }
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> Size {
        let m = self.measurer.measure(text, style);
        Size::new(m.advance_width, m.line_height())
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
