// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-to-screen transforms.
//!
//! A transform maps an axis' actual data interval onto a screen interval. The
//! screen interval may be inverted (vertical axes, reversed axes); the mapping
//! stays monotonic and reversal is encoded in its direction.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A screen transform for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScreenTransform {
    /// Linear mapping.
    Linear(LinearTransform),
    /// Logarithmic mapping.
    Log(LogTransform),
}

impl ScreenTransform {
    /// Maps a data value into screen space.
    pub fn map(&self, value: f64) -> f64 {
        match self {
            Self::Linear(t) => t.map(value),
            Self::Log(t) => t.map(value),
        }
    }

    /// Maps a screen coordinate back into data space.
    pub fn invert(&self, coordinate: f64) -> f64 {
        match self {
            Self::Linear(t) => t.invert(coordinate),
            Self::Log(t) => t.invert(coordinate),
        }
    }
}

/// A linear mapping from a data interval to a screen interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTransform {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearTransform {
    /// Creates a transform mapping `domain` endpoints onto `range` endpoints.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from data space into screen space.
    ///
    /// A degenerate domain maps every value onto the start of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Maps a screen coordinate back into data space.
    pub fn invert(&self, coordinate: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + (coordinate - r0) / span * (d1 - d0)
    }
}

/// A logarithmic mapping from a positive data interval to a screen interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogTransform {
    log_domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl LogTransform {
    /// Creates a base-10 log transform.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::with_base(domain, range, 10.0)
    }

    /// Creates a log transform with an explicit base.
    ///
    /// Bases that are not finite, not positive, or equal to one fall back to 10.
    pub fn with_base(domain: (f64, f64), range: (f64, f64), base: f64) -> Self {
        let base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        let log = |v: f64| v.ln() / base.ln();
        Self {
            log_domain: (log(domain.0), log(domain.1)),
            range,
            base,
        }
    }

    fn log(&self, value: f64) -> f64 {
        value.ln() / self.base.ln()
    }

    /// Maps a value from data space into screen space.
    ///
    /// Values `<= 0` have no logarithm and map to NaN.
    pub fn map(&self, value: f64) -> f64 {
        if value <= 0.0 {
            return f64::NAN;
        }
        let (l0, l1) = self.log_domain;
        let (r0, r1) = self.range;
        let span = l1 - l0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        r0 + (self.log(value) - l0) / span * (r1 - r0)
    }

    /// Maps a screen coordinate back into data space.
    pub fn invert(&self, coordinate: f64) -> f64 {
        let (l0, l1) = self.log_domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let exponent = if span == 0.0 {
            l0
        } else {
            l0 + (coordinate - r0) / span * (l1 - l0)
        };
        self.base.powf(exponent)
    }
}
