// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-axis render scenarios against a [`RecordingSurface`].

extern crate std;

use std::string::String;
use std::vec::Vec;

use gridwork_text::{HorizontalAlign, VerticalAlign};
use kurbo::{Point, Rect};

use crate::recording::{DrawCommand, RecordingSurface};
use crate::{
    Axis, AxisKind, AxisPens, AxisPosition, AxisRenderer, CategoryAxisRenderer,
    DateTimeAxisRenderer, LinearAxisRenderer, LogarithmicAxisRenderer, Pen, PlotFrame,
    RendererConfig, TickStyle, renderer_for,
};

const PLOT: Rect = Rect::new(50.0, 20.0, 250.0, 120.0);
const EPS: f64 = 1e-9;

fn surface() -> RecordingSurface {
    RecordingSurface::new(300.0, 150.0)
}

fn prepared(mut axis: Axis) -> Axis {
    axis.update_transform(PLOT);
    axis
}

fn render(axis: &Axis) -> RecordingSurface {
    let mut s = surface();
    renderer_for(axis.kind, RendererConfig::default()).render(&mut s, &PlotFrame::new(PLOT), axis);
    s
}

fn labels(surface: &RecordingSurface) -> Vec<String> {
    surface.texts().map(|t| t.text.clone()).collect()
}

fn all_pens() -> AxisPens {
    AxisPens::default().with_gridlines(Pen::default(), Pen::default().with_dashes([1.0, 1.0]))
}

fn batch_for<'a>(surface: &'a RecordingSurface, pen: &Pen) -> Option<&'a [Point]> {
    surface
        .segment_batches()
        .find(|(_, p)| *p == pen)
        .map(|(points, _)| points)
}

/// Along-axis coordinates of each segment's first point.
fn along(points: &[Point], horizontal: bool) -> Vec<f64> {
    points
        .chunks_exact(2)
        .map(|s| if horizontal { s[0].x } else { s[0].y })
        .collect()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-6, "{actual:?} vs {expected:?}");
    }
}

fn zero_to_ten() -> Axis {
    Axis::linear(AxisPosition::Bottom)
        .with_range(0.0, 10.0)
        .with_major_ticks([0.0, 2.0, 4.0, 6.0, 8.0, 10.0])
        .with_minor_ticks((0..=10).map(f64::from))
}

#[test]
fn horizontal_iff_top_or_bottom() {
    for position in [
        AxisPosition::Left,
        AxisPosition::Right,
        AxisPosition::Top,
        AxisPosition::Bottom,
    ] {
        let axis = prepared(Axis::linear(position).with_tick_style(TickStyle::None));
        let s = render(&axis);
        let (p0, p1, _) = s.lines().next().expect("baseline is drawn");
        let baseline_is_horizontal = p0.y == p1.y && p0.x != p1.x;
        assert_eq!(baseline_is_horizontal, position.is_horizontal(), "{position:?}");
    }
}

#[test]
fn bottom_axis_zero_to_ten() {
    let axis = prepared(zero_to_ten().with_pens(all_pens()));
    let s = render(&axis);
    let x = |v: f64| 50.0 + v * 20.0;

    // Four batches, in layer order.
    let batches: Vec<_> = s.segment_batches().collect();
    assert_eq!(batches.len(), 4);

    let minor_gridlines = along(batches[0].0, true);
    let minor_ticks = along(batches[2].0, true);
    let odd: Vec<f64> = [1.0, 3.0, 5.0, 7.0, 9.0].into_iter().map(x).collect();
    assert_close(&minor_gridlines, &odd);
    assert_close(&minor_ticks, &odd);

    let even: Vec<f64> = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0].into_iter().map(x).collect();
    assert_close(&along(batches[3].0, true), &even);

    // Major gridlines, then the baseline across the full plot width.
    let major = batches[1].0;
    assert_eq!(major.len(), 2 * 7);
    assert_eq!(major[12], Point::new(PLOT.x0, PLOT.y1));
    assert_eq!(major[13], Point::new(PLOT.x1, PLOT.y1));
    assert_eq!(major[0], Point::new(PLOT.x0, PLOT.y0));
    assert_eq!(major[1], Point::new(PLOT.x0, PLOT.y1));

    assert_eq!(labels(&s), ["0", "2", "4", "6", "8", "10"]);
    for t in s.texts() {
        // Outside tick of 7 plus the label distance of 8.
        assert!((t.anchor.y - (PLOT.y1 + 15.0)).abs() < EPS);
        assert_eq!((t.horizontal, t.vertical), (HorizontalAlign::Center, VerticalAlign::Top));
    }
}

#[test]
fn tick_marks_follow_the_tick_style() {
    let axis = prepared(zero_to_ten().with_tick_style(TickStyle::Crossing));
    let s = render(&axis);
    let batches: Vec<_> = s.segment_batches().collect();
    // Minor then major ticks; no gridline pens by default.
    assert_eq!(batches.len(), 2);
    let minor = batches[0].0;
    assert!((minor[0].y - (PLOT.y1 - 3.0)).abs() < EPS);
    assert!((minor[1].y - (PLOT.y1 + 3.0)).abs() < EPS);
    let major = batches[1].0;
    assert!((major[0].y - (PLOT.y1 - 5.25)).abs() < EPS);
    assert!((major[1].y - (PLOT.y1 + 5.25)).abs() < EPS);
}

#[test]
fn shared_major_and_minor_values_draw_once() {
    let axis = prepared(
        Axis::linear(AxisPosition::Left)
            .with_range(0.0, 1.0)
            .with_major_ticks([0.0, 0.5, 1.0])
            .with_minor_ticks([0.0, 0.25, 0.5, 0.75, 1.0])
            .with_pens(all_pens()),
    );
    let s = render(&axis);
    let pens = all_pens();
    let minor_pen = pens.minor_gridline.as_ref().expect("minor gridline pen");
    let minor = batch_for(&s, minor_pen).expect("minor gridlines");
    assert_close(&along(minor, false), &[95.0, 45.0]);
}

#[test]
fn values_outside_the_range_are_dropped() {
    let axis = prepared(
        Axis::linear(AxisPosition::Bottom)
            .with_range(0.0, 10.0)
            .with_major_ticks([-2.0, 0.0, 5.0, 12.0])
            .with_minor_ticks([-1.0, 1.0, 11.0])
            .with_extra_gridlines([-3.0, 3.0, 10.0, 13.0])
            .with_pens(all_pens()),
    );
    let s = render(&axis);
    let in_plot = |p: &Point| p.x >= PLOT.x0 && p.x <= PLOT.x1;
    for (points, _) in s.segment_batches() {
        assert!(points.iter().all(in_plot));
    }
    assert_eq!(labels(&s), ["0", "5"]);

    // Inclusive at the maximum.
    let extra: Vec<f64> = s.lines().map(|(p0, _, _)| p0.x).collect();
    assert_close(&extra, &[110.0, 250.0]);
}

#[test]
fn no_major_pen_and_no_ticks_draw_only_baseline_and_title() {
    let pens = AxisPens {
        major_gridline: None,
        ..AxisPens::default()
    };
    let axis = prepared(
        zero_to_ten()
            .with_pens(pens)
            .with_tick_style(TickStyle::None)
            .with_title("Time"),
    );
    let s = render(&axis);
    assert_eq!(s.segment_batches().count(), 0);
    let lines: Vec<_> = s.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!((lines[0].0, lines[0].1), (Point::new(50.0, 120.0), Point::new(250.0, 120.0)));
    assert_eq!(labels(&s), ["Time"]);
}

#[test]
fn major_gridline_pen_keeps_labels_without_ticks() {
    let axis = prepared(
        zero_to_ten()
            .with_pens(all_pens())
            .with_tick_style(TickStyle::None),
    );
    let s = render(&axis);
    assert_eq!(labels(&s), ["0", "2", "4", "6", "8", "10"]);

    // With no tick marks the labels start at the axis line.
    let zero = s.texts().find(|t| t.text == "0").expect("zero label");
    assert!((zero.anchor.y - 128.0).abs() < EPS);
}

#[test]
fn absent_pens_issue_no_calls() {
    let axis = prepared(zero_to_ten().with_pens(AxisPens::none()));
    let s = render(&axis);
    assert!(
        s.commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::Text(_)))
    );
    assert_eq!(labels(&s).len(), 6);
}

#[test]
fn zero_crossing_axis_sits_on_the_perpendicular_origin() {
    let y = prepared(
        Axis::linear(AxisPosition::Left)
            .with_range(-5.0, 5.0)
            .with_major_ticks([-5.0, 0.0, 5.0]),
    );
    let x = prepared(
        Axis::linear(AxisPosition::Bottom)
            .with_range(-10.0, 10.0)
            .with_major_ticks([-10.0, -5.0, 0.0, 5.0, 10.0])
            .with_zero_crossing(true),
    );
    let frame = PlotFrame::new(PLOT).with_axes(Some(&x), Some(&y));
    let apos = y.transform(0.0);
    assert!((apos - 70.0).abs() < EPS);

    let mut s = surface();
    LinearAxisRenderer::default().render(&mut s, &frame, &x);

    assert_eq!(labels(&s), ["-10", "-5", "5", "10"]);
    let lines: Vec<_> = s.lines().collect();
    // Zero line through x = transform(0), then the baseline at apos.
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].0, lines[0].1), (Point::new(150.0, PLOT.y0), Point::new(150.0, PLOT.y1)));
    assert_eq!((lines[1].0.y, lines[1].1.y), (apos, apos));

    let ticks: Vec<_> = s.segment_batches().collect();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].0.len(), 10);
    assert!((ticks[0].0[0].y - apos).abs() < EPS);
}

#[test]
fn zero_crossing_title_follows_the_perpendicular_maximum() {
    let y = prepared(Axis::linear(AxisPosition::Left).with_range(-5.0, 5.0));
    let x = prepared(
        Axis::linear(AxisPosition::Bottom)
            .with_range(-10.0, 10.0)
            .with_zero_crossing(true)
            .with_title("T"),
    );
    let frame = PlotFrame::new(PLOT).with_axes(Some(&x), Some(&y));
    let mut s = surface();
    LinearAxisRenderer::default().render(&mut s, &frame, &x);

    let title = s.texts().find(|t| t.text == "T").expect("title");
    let far = y.transform(y.actual_maximum);
    assert!((far - PLOT.y0).abs() < EPS);
    assert!((title.anchor.x - far).abs() < EPS);
    assert!((title.anchor.y - 146.0).abs() < EPS);
}

#[test]
fn zero_crossing_title_falls_back_to_the_span_midpoint() {
    // A log axis over non-positive values cannot place its maximum.
    let y = prepared(Axis::logarithmic(AxisPosition::Left).with_range(-10.0, -1.0));
    assert!(!y.transform(y.actual_maximum).is_finite());
    let x = prepared(
        Axis::linear(AxisPosition::Bottom)
            .with_range(-10.0, 10.0)
            .with_zero_crossing(true)
            .with_title("T"),
    );
    let frame = PlotFrame::new(PLOT).with_axes(Some(&x), Some(&y));
    let mut s = surface();
    LinearAxisRenderer::default().render(&mut s, &frame, &x);

    let title = s.texts().find(|t| t.text == "T").expect("title");
    assert_eq!(title.anchor, Point::new(150.0, 146.0));
}

#[test]
fn zero_crossing_label_only_suppressed_when_crossing() {
    let x = prepared(
        Axis::linear(AxisPosition::Bottom)
            .with_range(-1.0, 1.0)
            .with_major_ticks([-1.0, 0.0, 1.0]),
    );
    assert_eq!(labels(&render(&x)), ["-1", "0", "1"]);
}

#[test]
fn titles_sit_on_the_surface_edges() {
    let cases = [
        (AxisPosition::Left, Point::new(4.0, 70.0), -90.0, VerticalAlign::Top),
        (AxisPosition::Right, Point::new(296.0, 70.0), -90.0, VerticalAlign::Bottom),
        (AxisPosition::Top, Point::new(150.0, 4.0), 0.0, VerticalAlign::Top),
        (AxisPosition::Bottom, Point::new(150.0, 146.0), 0.0, VerticalAlign::Bottom),
    ];
    for (position, anchor, angle, vertical) in cases {
        let axis = prepared(Axis::linear(position).with_title("T"));
        let s = render(&axis);
        let title = s.texts().find(|t| t.text == "T").expect("title");
        assert_eq!(title.anchor, anchor, "{position:?}");
        assert_eq!(title.rotation_degrees, angle);
        assert_eq!(title.horizontal, HorizontalAlign::Center);
        assert_eq!(title.vertical, vertical);
    }
}

#[test]
fn blank_title_is_not_drawn() {
    let axis = prepared(Axis::linear(AxisPosition::Bottom).with_title("   "));
    assert_eq!(render(&axis).texts().count(), 0);
}

#[test]
fn reversed_axis_mirrors_labels() {
    let axis = prepared(zero_to_ten().with_reversed(true));
    let s = render(&axis);
    let zero = s.texts().find(|t| t.text == "0").expect("zero label");
    let ten = s.texts().find(|t| t.text == "10").expect("ten label");
    assert!((zero.anchor.x - PLOT.x1).abs() < EPS);
    assert!((ten.anchor.x - PLOT.x0).abs() < EPS);
}

#[test]
fn logarithmic_axis_skips_non_positive_values() {
    let axis = prepared(
        Axis::logarithmic(AxisPosition::Left)
            .with_range(1.0, 1000.0)
            .with_major_ticks([1.0, 10.0, 100.0, 1000.0])
            .with_minor_ticks([-1.0, 0.0, 2.0, 5.0, 20.0, 50.0])
            .with_extra_gridlines([0.0, 30.0]),
    );
    let s = render(&axis);
    assert_eq!(labels(&s), ["1", "10", "100", "1000"]);

    // Decades are evenly spaced.
    let ys: Vec<f64> = s.texts().map(|t| t.anchor.y).collect();
    for pair in ys.windows(2) {
        assert!(((pair[0] - pair[1]) - 100.0 / 3.0).abs() < 1e-6);
    }

    let batches: Vec<_> = s.segment_batches().collect();
    assert_eq!(batches[0].0.len(), 2 * 4);
    assert!(batches.iter().all(|(p, _)| p.iter().all(|p| p.y.is_finite())));
    assert_eq!(s.lines().count(), 2);
}

#[test]
fn category_labels_sit_between_boundary_ticks() {
    let axis = prepared(
        Axis::category(AxisPosition::Bottom, ["apples", "pears", "plums"])
            .with_major_ticks([-0.5, 0.5, 1.5, 2.5]),
    );
    let s = render(&axis);
    assert_eq!(labels(&s), ["apples", "pears", "plums"]);
    let xs: Vec<f64> = s.texts().map(|t| t.anchor.x).collect();
    let width = PLOT.width() / 3.0;
    for (i, x) in xs.iter().enumerate() {
        let centre = PLOT.x0 + (i as f64 + 0.5) * width;
        assert!((x - centre).abs() < 1e-6);
    }
}

#[test]
fn centred_category_ticks_label_in_place() {
    let axis = prepared(
        Axis::category(AxisPosition::Left, ["a", "b"])
            .with_tick_centered(true)
            .with_major_ticks([0.0, 1.0]),
    );
    let s = render(&axis);
    assert_eq!(labels(&s), ["a", "b"]);
    let ticks: Vec<_> = s.segment_batches().collect();
    let tick_ys = along(ticks[0].0, false);
    let label_ys: Vec<f64> = s.texts().map(|t| t.anchor.y).collect();
    assert_eq!(tick_ys, label_ys);
}

#[test]
fn date_time_labels_follow_tick_spacing() {
    let day = 86_400.0;
    let start = 1_614_816_000.0; // 2021-03-04T00:00:00Z
    let axis = prepared(
        Axis::date_time(AxisPosition::Bottom)
            .with_range(start, start + 2.0 * day)
            .with_major_ticks([start, start + day, start + 2.0 * day]),
    );
    let s = render(&axis);
    assert_eq!(labels(&s), ["2021-03-04", "2021-03-05", "2021-03-06"]);

    let hours = prepared(
        Axis::date_time(AxisPosition::Bottom)
            .with_range(start, start + 7_200.0)
            .with_major_ticks([start, start + 3_600.0, start + 7_200.0]),
    );
    assert_eq!(labels(&render(&hours)), ["00:00", "01:00", "02:00"]);
}

#[test]
fn lone_date_tick_is_labelled_with_its_date() {
    let start = 1_614_816_000.0; // 2021-03-04T00:00:00Z
    let axis = prepared(
        Axis::date_time(AxisPosition::Bottom)
            .with_range(start, start + 86_400.0)
            .with_major_ticks([start]),
    );
    assert_eq!(labels(&render(&axis)), ["2021-03-04"]);
}

#[test]
fn date_time_renderer_skips_unrepresentable_instants() {
    let axis = prepared(
        Axis::date_time(AxisPosition::Bottom)
            .with_range(0.0, 1.0e20)
            .with_major_ticks([0.0, 1.0e20])
            .with_date_format("%Y"),
    );
    let mut s = surface();
    DateTimeAxisRenderer::default().render(&mut s, &PlotFrame::new(PLOT), &axis);
    assert_eq!(labels(&s), ["1970"]);
}

#[test]
fn custom_config_moves_labels_and_titles() {
    let axis = prepared(
        Axis::linear(AxisPosition::Top)
            .with_range(0.0, 1.0)
            .with_major_ticks([0.5])
            .with_title("T"),
    );
    let config = RendererConfig::default()
        .with_tick_label_distance(2.0)
        .with_title_distance(10.0);
    let mut s = surface();
    LinearAxisRenderer::new(config).render(&mut s, &PlotFrame::new(PLOT), &axis);
    let texts: Vec<_> = s.texts().collect();
    // apos 20, outside tick -7, distance -2.
    assert!((texts[0].anchor.y - 11.0).abs() < EPS);
    assert_eq!(texts[0].vertical, VerticalAlign::Bottom);
    assert_eq!(texts[1].anchor, Point::new(150.0, 10.0));
}

#[test]
fn renderer_is_reusable_across_axes() {
    let renderer = LinearAxisRenderer::default();
    let a = prepared(zero_to_ten());
    let b = prepared(zero_to_ten().with_tick_style(TickStyle::Inside));

    let mut first = surface();
    renderer.render(&mut first, &PlotFrame::new(PLOT), &a);
    let mut other = surface();
    renderer.render(&mut other, &PlotFrame::new(PLOT), &b);
    let mut again = surface();
    renderer.render(&mut again, &PlotFrame::new(PLOT), &a);

    assert_eq!(first.commands(), again.commands());
    assert_ne!(first.commands(), other.commands());
}

#[test]
fn families_agree_on_linear_values() {
    let axis = prepared(zero_to_ten());
    let frame = PlotFrame::new(PLOT);
    let renderers: [&dyn AxisRenderer; 3] = [
        &LinearAxisRenderer::default(),
        &LogarithmicAxisRenderer::default(),
        &CategoryAxisRenderer::default(),
    ];
    let mut tick_counts = Vec::new();
    for r in renderers {
        let mut s = surface();
        r.render(&mut s, &frame, &axis);
        tick_counts.push(s.segment_batches().map(|(p, _)| p.len()).sum::<usize>());
    }
    // Log drops the zero tick; categories keep every tick.
    assert_eq!(tick_counts, [22, 20, 22]);
}

#[test]
fn measure_matches_rendered_labels() {
    let axis = prepared(zero_to_ten().with_title("x"));
    let s = surface();
    let renderer = renderer_for(AxisKind::Linear, RendererConfig::default());
    let m = renderer.measure(&s, &axis);
    assert!((m - (7.0 + 8.0 + 12.0 + 4.0 + 12.0)).abs() < EPS);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "axis angle should be in the interval")]
fn out_of_range_label_angle_is_a_contract_violation() {
    let axis = prepared(zero_to_ten().with_angle(200.0));
    let _ = render(&axis);
}
