// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date-time label formatting.
//!
//! Date-time axes carry their values as seconds since the Unix epoch (UTC).
//! Labels are rendered with `chrono` `strftime`-style patterns; when the axis
//! does not pick one, the pattern is chosen from the spacing of the major ticks.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

use chrono::{DateTime, Utc};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MINUTE: f64 = 60.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 365.0 * DAY;

/// Chooses a label pattern for ticks spaced `step` seconds apart.
///
/// A non-positive or non-finite `step` carries no spacing information and
/// yields a plain date.
pub fn default_time_pattern(step: f64) -> &'static str {
    if !(step.is_finite() && step > 0.0) {
        "%Y-%m-%d"
    } else if step < MINUTE {
        "%H:%M:%S"
    } else if step < DAY {
        "%H:%M"
    } else if step < YEAR {
        "%Y-%m-%d"
    } else {
        "%Y"
    }
}

/// Converts epoch seconds into a UTC timestamp, if representable.
pub fn timestamp(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() || seconds.abs() > i64::MAX as f64 {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1.0e9).round().clamp(0.0, 999_999_999.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "range-checked above; nanos clamped to a u32 subrange"
    )]
    {
        DateTime::from_timestamp(whole as i64, nanos as u32)
    }
}

/// Formats epoch seconds with a `strftime`-style `pattern`.
///
/// Unrepresentable instants and invalid patterns produce an empty label.
pub fn format_timestamp(seconds: f64, pattern: &str) -> String {
    let Some(instant) = timestamp(seconds) else {
        return String::new();
    };
    let mut out = String::new();
    if write!(out, "{}", instant.format(pattern)).is_err() {
        tracing::warn!(pattern, "invalid date-time label pattern");
        out.clear();
    }
    out
}
