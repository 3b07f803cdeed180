// Copyright 2025 the Gridwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::ln`, `f64::sin` and friends live in `std`, not `core`. Axis code calls
//! them through this trait, which forwards to `libm` when `std` is disabled.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn round(self) -> Self;
    fn ln(self) -> Self;
    fn log10(self) -> Self;
    fn powi(self, n: i32) -> Self;
    fn powf(self, n: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
macro_rules! forward_to_libm {
    ($($name:ident => $libm:ident),* $(,)?) => {
        $(
            fn $name(self) -> Self {
                libm::$libm(self)
            }
        )*
    };
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    forward_to_libm! {
        floor => floor,
        round => round,
        ln => log,
        log10 => log10,
        sin => sin,
        cos => cos,
    }

    fn powi(self, n: i32) -> Self {
        libm::pow(self, f64::from(n))
    }

    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("gridwork_axes requires either the `std` or `libm` feature");
