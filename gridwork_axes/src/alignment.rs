// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text alignment under label rotation.

use gridwork_text::{HorizontalAlign, VerticalAlign};

/// Rotates a pair of default label alignments by `angle` degrees.
///
/// Alignments snap to quarter turns:
/// - `(-45, 45)`: unchanged.
/// - above `135` or below `-135`: both negated.
/// - `(45, 135]`: horizontal takes the vertical sign, vertical takes the
///   negated horizontal sign.
/// - `[-135, -45)`: horizontal takes the negated vertical sign, vertical takes
///   the horizontal sign.
///
/// Exactly `45` and `-45` keep the defaults.
///
/// `angle` must lie in `[-180, 180]`; this is checked in debug builds.
pub fn rotated_alignments(
    angle: f64,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
) -> (HorizontalAlign, VerticalAlign) {
    debug_assert!(
        (-180.0..=180.0).contains(&angle),
        "axis angle should be in the interval [-180, 180] degrees, got {angle}"
    );

    let h = horizontal.sign();
    let v = vertical.sign();
    if angle > 135.0 || angle < -135.0 {
        (HorizontalAlign::from_sign(-h), VerticalAlign::from_sign(-v))
    } else if angle > 45.0 {
        (HorizontalAlign::from_sign(v), VerticalAlign::from_sign(-h))
    } else if angle < -45.0 {
        (HorizontalAlign::from_sign(-v), VerticalAlign::from_sign(h))
    } else {
        (horizontal, vertical)
    }
}
