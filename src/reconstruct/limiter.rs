//! Slope limiters for piecewise-linear reconstruction.
//!
//! Each limiter maps the backward and forward differences of a cell to a
//! limited slope, returning zero at local extrema.
//!
//! # References
//! - van Leer (1977), "Towards the ultimate conservative difference scheme IV"
//! - Roe (1986), "Characteristic-based schemes for the Euler equations"

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Slope limiter used by [`PiecewiseLinear`](super::PiecewiseLinear).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeLimiter {
    /// Minmod: smallest one-sided slope (most diffusive)
    Minmod,
    /// Harmonic-mean van Leer limiter
    #[default]
    VanLeer,
    /// Monotonized central (least diffusive)
    MonotonizedCentral,
}

impl SlopeLimiter {
    /// Limited slope from backward difference `dql` and forward difference `dqr`.
    #[inline]
    pub fn slope(self, dql: f64, dqr: f64) -> f64 {
        match self {
            SlopeLimiter::Minmod => minmod(dql, dqr),
            SlopeLimiter::VanLeer => van_leer(dql, dqr),
            SlopeLimiter::MonotonizedCentral => monotonized_central(dql, dqr),
        }
    }

    /// Name used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            SlopeLimiter::Minmod => "minmod",
            SlopeLimiter::VanLeer => "van_leer",
            SlopeLimiter::MonotonizedCentral => "monotonized_central",
        }
    }
}

impl FromStr for SlopeLimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minmod" => Ok(SlopeLimiter::Minmod),
            "van_leer" | "vanleer" | "vl" => Ok(SlopeLimiter::VanLeer),
            "monotonized_central" | "mc" => Ok(SlopeLimiter::MonotonizedCentral),
            _ => Err(ConfigError::UnknownVariant {
                enum_type: "slope limiter",
                variant: s.to_owned(),
            }),
        }
    }
}

/// Minmod of two arguments.
#[inline]
pub(crate) fn minmod(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        0.0
    } else if a.abs() < b.abs() {
        a
    } else {
        b
    }
}

#[inline]
fn van_leer(a: f64, b: f64) -> f64 {
    let ab = a * b;
    if ab > 0.0 { 2.0 * ab / (a + b) } else { 0.0 }
}

#[inline]
fn monotonized_central(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        return 0.0;
    }
    let mag = (2.0 * a.abs()).min(2.0 * b.abs()).min(0.5 * (a + b).abs());
    mag.copysign(a)
}
