// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis rendering demos for `gridwork_axes`.
//!
//! Writes `gridwork_demo.html`, one inline SVG per section. Set `RUST_LOG=debug`
//! (or `trace`) to see per-axis render events.

mod html;
mod svg;

use gridwork_axes::{
    Axis, AxisPens, AxisPosition, DrawingSurface, Pen, PlotFrame, RendererConfig, TextStyle,
    TickStyle, renderer_for,
};
use gridwork_text::TextMeasurer;
use kurbo::Rect;
use peniko::color::palette::css;
use tracing::{debug, info};

const OUTPUT: &str = "gridwork_demo.html";
const WIDTH: f64 = 420.0;
const HEIGHT: f64 = 260.0;
const PADDING: f64 = 12.0;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let sections = vec![
        four_sides_demo(),
        zero_crossing_demo(),
        log_time_demo(),
        category_demo(),
        label_angle_demo(),
        reversed_span_demo(),
    ];

    let html = html::render_report("gridwork axes demo", &sections);
    std::fs::write(OUTPUT, html)?;
    info!(path = OUTPUT, sections = sections.len(), "wrote report");
    Ok(())
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(gridwork_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(gridwork_text::HeuristicTextMeasurer)
    }
}

/// `start, start + step, ...` up to `end`.
///
/// Values are integer multiples of `step` offset from `start`, so majors and
/// minors generated from compatible steps share exact bit patterns.
fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut k = 0_u32;
    loop {
        let v = start + f64::from(k) * step;
        if v > end + step * 1e-9 {
            break;
        }
        out.push(v);
        k += 1;
    }
    out
}

fn decades(max_exponent: i32) -> Vec<f64> {
    (0..=max_exponent).map(|e| 10_f64.powi(e)).collect()
}

fn decade_minors(max_exponent: i32) -> Vec<f64> {
    (0..max_exponent)
        .flat_map(|e| (2..10).map(move |m| f64::from(m) * 10_f64.powi(e)))
        .collect()
}

fn grid_pens() -> AxisPens {
    AxisPens::default().with_gridlines(
        Pen::solid(css::BLACK.with_alpha(0.18), 1.0),
        Pen::solid(css::BLACK.with_alpha(0.08), 1.0).with_dashes([2.0, 2.0]),
    )
}

fn font() -> TextStyle {
    TextStyle::new(11.0)
}

/// Sizes the plot area so every axis fits, renders all axes, and returns the SVG.
fn render_figure(mut axes: Vec<Axis>) -> String {
    let config = RendererConfig::default();
    let measurer = demo_measurer();
    let mut surface = svg::SvgSurface::new(WIDTH, HEIGHT, &*measurer);

    let mut margins = [PADDING; 4];
    for axis in axes.iter().filter(|a| !a.position_at_zero_crossing) {
        let thickness = renderer_for(axis.kind, config).measure(&surface, axis);
        let side = match axis.position {
            AxisPosition::Left => 0,
            AxisPosition::Top => 1,
            AxisPosition::Right => 2,
            AxisPosition::Bottom => 3,
        };
        margins[side] = margins[side].max(PADDING + thickness);
    }
    let plot = Rect::new(
        margins[0],
        margins[1],
        surface.width() - margins[2],
        surface.height() - margins[3],
    );
    debug!(?plot, "plot area");

    for axis in &mut axes {
        axis.update_transform(plot);
    }
    surface.frame(plot, css::LIGHT_GRAY);

    let x = axes.iter().find(|a| a.position.is_horizontal());
    let y = axes.iter().find(|a| !a.position.is_horizontal());
    let frame = PlotFrame::new(plot).with_axes(x, y);
    for axis in &axes {
        renderer_for(axis.kind, config).render(&mut surface, &frame, axis);
    }
    surface.to_svg_string()
}

fn four_sides_demo() -> html::HtmlSection {
    let left = Axis::linear(AxisPosition::Left)
        .with_range(0.0, 100.0)
        .with_major_ticks(stepped(0.0, 100.0, 20.0))
        .with_minor_ticks(stepped(0.0, 100.0, 5.0))
        .with_pens(grid_pens())
        .with_font(font())
        .with_title("amplitude");
    let bottom = Axis::linear(AxisPosition::Bottom)
        .with_range(0.0, 10.0)
        .with_major_ticks(stepped(0.0, 10.0, 2.0))
        .with_minor_ticks(stepped(0.0, 10.0, 0.5))
        .with_pens(grid_pens())
        .with_font(font())
        .with_title("time (s)");
    let right = Axis::linear(AxisPosition::Right)
        .with_range(-1.0, 1.0)
        .with_major_ticks(stepped(-1.0, 1.0, 0.5))
        .with_minor_ticks(stepped(-1.0, 1.0, 0.125))
        .with_tick_style(TickStyle::Inside)
        .with_font(font())
        .with_title("phase");
    let top = Axis::linear(AxisPosition::Top)
        .with_range(0.0, 1000.0)
        .with_major_ticks(stepped(0.0, 1000.0, 250.0))
        .with_tick_style(TickStyle::Crossing)
        .with_font(font());

    html::HtmlSection {
        title: "Four sides",
        description: "Outside ticks with gridlines (left, bottom), inside ticks (right) and crossing ticks (top). Minor values shared with majors are drawn once.",
        svg: render_figure(vec![left, bottom, right, top]),
    }
}

fn zero_crossing_demo() -> html::HtmlSection {
    let x = Axis::linear(AxisPosition::Bottom)
        .with_range(-10.0, 10.0)
        .with_major_ticks(stepped(-10.0, 10.0, 5.0))
        .with_minor_ticks(stepped(-10.0, 10.0, 1.0))
        .with_zero_crossing(true)
        .with_tick_style(TickStyle::Crossing)
        .with_extra_gridlines([7.5])
        .with_font(font());
    let y = Axis::linear(AxisPosition::Left)
        .with_range(-5.0, 5.0)
        .with_major_ticks(stepped(-5.0, 5.0, 2.5))
        .with_zero_crossing(true)
        .with_tick_style(TickStyle::Crossing)
        .with_font(font());

    html::HtmlSection {
        title: "Zero crossing",
        description: "Both axes are drawn through the origin of the other; the 0 labels are suppressed and a zero line is drawn. The dashed line is an extra gridline at 7.5.",
        svg: render_figure(vec![x, y]),
    }
}

fn log_time_demo() -> html::HtmlSection {
    let day = 86_400.0;
    let start = 1_704_067_200.0; // 2024-01-01T00:00:00Z
    let bottom = Axis::date_time(AxisPosition::Bottom)
        .with_range(start, start + 6.0 * day)
        .with_major_ticks(stepped(start, start + 6.0 * day, day))
        .with_minor_ticks(stepped(start, start + 6.0 * day, day / 4.0))
        .with_pens(grid_pens())
        .with_font(font())
        .with_title("date (UTC)");
    let left = Axis::logarithmic(AxisPosition::Left)
        .with_range(1.0, 10_000.0)
        .with_major_ticks(decades(4))
        .with_minor_ticks(decade_minors(4))
        .with_pens(grid_pens())
        .with_font(font())
        .with_title("count");

    html::HtmlSection {
        title: "Date-time and logarithmic",
        description: "Day ticks labelled with a pattern chosen from the tick spacing; a base-10 log axis with decade majors.",
        svg: render_figure(vec![bottom, left]),
    }
}

fn category_demo() -> html::HtmlSection {
    let names = ["north", "east", "south", "west"];
    let n = names.len() as f64;
    let bottom = Axis::category(AxisPosition::Bottom, names)
        .with_major_ticks(stepped(-0.5, n - 0.5, 1.0))
        .with_font(font());
    let top = Axis::category(AxisPosition::Top, names)
        .with_tick_centered(true)
        .with_major_ticks(stepped(0.0, n - 1.0, 1.0))
        .with_font(font());
    let left = Axis::linear(AxisPosition::Left)
        .with_range(0.0, 50.0)
        .with_major_ticks(stepped(0.0, 50.0, 10.0))
        .with_pens(grid_pens())
        .with_font(font());

    html::HtmlSection {
        title: "Categories",
        description: "Bottom: ticks on category boundaries with labels between them. Top: ticks centred on categories.",
        svg: render_figure(vec![bottom, top, left]),
    }
}

fn label_angle_demo() -> html::HtmlSection {
    let bottom = Axis::linear(AxisPosition::Bottom)
        .with_range(0.0, 100_000.0)
        .with_major_ticks(stepped(0.0, 100_000.0, 20_000.0))
        .with_angle(45.0)
        .with_font(font())
        .with_title("rotated 45°");
    let left = Axis::linear(AxisPosition::Left)
        .with_range(0.0, 1.0)
        .with_major_ticks(stepped(0.0, 1.0, 0.25))
        .with_angle(-90.0)
        .with_font(font())
        .with_title("rotated -90°");
    let top = Axis::linear(AxisPosition::Top)
        .with_range(0.0, 100_000.0)
        .with_major_ticks(stepped(0.0, 100_000.0, 20_000.0))
        .with_angle(180.0)
        .with_font(font());

    html::HtmlSection {
        title: "Label angles",
        description: "Label alignment snaps to quarter turns: 45° keeps the defaults, -90° swaps them, 180° flips both.",
        svg: render_figure(vec![bottom, left, top]),
    }
}

fn reversed_span_demo() -> html::HtmlSection {
    let bottom = Axis::linear(AxisPosition::Bottom)
        .with_range(0.0, 10.0)
        .with_major_ticks(stepped(0.0, 10.0, 1.0))
        .with_reversed(true)
        .with_font(font())
        .with_title("reversed");
    let lower = Axis::linear(AxisPosition::Left)
        .with_range(0.0, 1.0)
        .with_span(0.0, 0.45)
        .with_major_ticks(stepped(0.0, 1.0, 0.5))
        .with_pens(grid_pens())
        .with_font(font());
    let upper = Axis::linear(AxisPosition::Left)
        .with_range(0.0, 100.0)
        .with_span(0.55, 1.0)
        .with_major_ticks(stepped(0.0, 100.0, 50.0))
        .with_pens(grid_pens())
        .with_font(font());

    html::HtmlSection {
        title: "Reversed axis and partial spans",
        description: "A reversed bottom axis, and two left axes each covering part of the plot height.",
        svg: render_figure(vec![bottom, lower, upper]),
    }
}
