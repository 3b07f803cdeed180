// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick mark placement relative to the axis line.

use crate::axis::{AxisPosition, TickStyle};

/// Offsets of a tick mark along the axis normal, relative to the axis line.
///
/// A tick at screen coordinate `t` is drawn from `apos + a0` to `apos + a1`.
/// `a1` is also where tick labels start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickSpan {
    /// Start offset.
    pub a0: f64,
    /// End offset.
    pub a1: f64,
}

impl TickSpan {
    /// The part of the tick sticking out of the plot area.
    pub fn outward_extent(&self, position: AxisPosition) -> f64 {
        let sign = position.outward_sign();
        (self.a0 * sign).max(self.a1 * sign).max(0.0)
    }
}

/// Computes the tick offsets for `tick_style` and `tick_size` at `position`.
///
/// Positive offsets point right/down. `Outside` ticks point away from the plot
/// area, `Inside` ticks into it, `Crossing` ticks straddle the axis line with
/// three quarters of the size on each side.
pub fn tick_positions(tick_style: TickStyle, tick_size: f64, position: AxisPosition) -> TickSpan {
    let sign = position.outward_sign();
    match tick_style {
        TickStyle::Crossing => TickSpan {
            a0: -0.75 * tick_size * sign,
            a1: 0.75 * tick_size * sign,
        },
        TickStyle::Inside => TickSpan {
            a0: -tick_size * sign,
            a1: 0.0,
        },
        TickStyle::Outside => TickSpan {
            a0: 0.0,
            a1: tick_size * sign,
        },
        TickStyle::None => TickSpan::default(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const ALL: [AxisPosition; 4] = [
        AxisPosition::Left,
        AxisPosition::Right,
        AxisPosition::Top,
        AxisPosition::Bottom,
    ];

    #[test]
    fn outside_ticks_point_away_from_the_plot() {
        let bottom = tick_positions(TickStyle::Outside, 7.0, AxisPosition::Bottom);
        assert_eq!(bottom, TickSpan { a0: 0.0, a1: 7.0 });
        let left = tick_positions(TickStyle::Outside, 7.0, AxisPosition::Left);
        assert_eq!(left, TickSpan { a0: 0.0, a1: -7.0 });
    }

    #[test]
    fn inside_ticks_point_into_the_plot() {
        let top = tick_positions(TickStyle::Inside, 4.0, AxisPosition::Top);
        assert_eq!(top, TickSpan { a0: 4.0, a1: 0.0 });
        let right = tick_positions(TickStyle::Inside, 4.0, AxisPosition::Right);
        assert_eq!(right, TickSpan { a0: -4.0, a1: 0.0 });
    }

    #[test]
    fn crossing_ticks_straddle_the_line() {
        for position in ALL {
            let span = tick_positions(TickStyle::Crossing, 8.0, position);
            assert_eq!(span.a0, -span.a1);
            assert_eq!(span.a1.abs(), 6.0);
            assert_eq!(span.a1.signum(), position.outward_sign());
        }
    }

    #[test]
    fn no_ticks_have_no_extent() {
        for position in ALL {
            let span = tick_positions(TickStyle::None, 7.0, position);
            assert_eq!(span, TickSpan::default());
            assert_eq!(span.outward_extent(position), 0.0);
        }
    }

    #[test]
    fn outward_extent_ignores_inside_part() {
        let span = tick_positions(TickStyle::Inside, 7.0, AxisPosition::Left);
        assert_eq!(span.outward_extent(AxisPosition::Left), 0.0);
        let span = tick_positions(TickStyle::Crossing, 8.0, AxisPosition::Top);
        assert_eq!(span.outward_extent(AxisPosition::Top), 6.0);
    }
}
