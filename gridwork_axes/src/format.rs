// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default numeric tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `value` with enough decimals to distinguish ticks `step` apart.
///
/// With a non-positive or non-finite `step` the shortest round-tripping
/// representation is used. Values within rounding noise of zero print as `0`.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if !(step.is_finite() && step > 0.0) {
        let value = if value == 0.0 { 0.0 } else { value };
        return format!("{value}");
    }
    if value.abs() < step * 1.0e-9 {
        return String::from("0");
    }
    let decimals = decimals_for_step(step);
    let text = format!("{value:.decimals$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        return String::from(&text[1..]);
    }
    text
}

fn decimals_for_step(step: f64) -> usize {
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        return 0;
    }
    // Steps like 0.25 need one decimal more than their leading digit suggests.
    let mut decimals = -exponent.max(-15.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    let scale = 10_f64.powi(decimals as i32);
    let scaled = step * scale;
    if (scaled - scaled.round()).abs() > 1.0e-6 {
        decimals += 1.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range"
    )]
    {
        decimals.min(15.0) as usize
    }
}

/// Returns the smallest distance between adjacent values, or `0` when there
/// are fewer than two.
pub fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}
