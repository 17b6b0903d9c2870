// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Circular longitude arithmetic.
//!
//! Ecliptic longitude lives on the circle ℝ/360°.  Every place in the crate
//! that compares longitudes goes through this module, so the scanner's
//! degree test and the refiner's sign test share one normalization:
//!
//! - [`Longitude::degrees`] folds into `[0, 360)`;
//! - [`Longitude::signed_offset`] folds a difference into `(−π, π]`;
//! - [`arc_contains`] decides whether a step from one longitude to the next
//!   passes a target, wrap included.

use std::f64::consts::{PI, TAU};
use std::fmt;

/// Folds `degrees` into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`; that
/// case is mapped back to `0.0`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(360.0);
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Folds an angle in radians into `(−π, π]`.
#[inline]
pub fn wrap_pi(radians: f64) -> f64 {
    let folded = radians.rem_euclid(TAU);
    if folded > PI {
        folded - TAU
    } else {
        folded
    }
}

/// Whether the half-open arc `[start, end)` (degrees, both already in
/// `[0, 360)`) contains `target`.
///
/// When `start > end` the arc wrapped through 360°→0° and membership is
/// `target >= start || target < end`.  A target equal to `start` belongs to
/// this arc, one equal to `end` to the next, so consecutive arcs never
/// report the same crossing twice.
#[inline]
pub fn arc_contains(start: f64, end: f64, target: f64) -> bool {
    if start <= end {
        start <= target && target < end
    } else {
        target >= start || target < end
    }
}

/// An ecliptic longitude, stored in radians.
///
/// The stored value is not reduced; views that need a canonical range
/// ([`degrees`](Self::degrees), [`signed_offset`](Self::signed_offset)) fold
/// on the way out.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl Longitude {
    /// Longitude from radians (any range).
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Longitude from degrees (any range).
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// Raw radians, as stored.
    #[inline]
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// Degrees folded into `[0, 360)`.
    #[inline]
    pub fn degrees(self) -> f64 {
        normalize_degrees(self.0.to_degrees())
    }

    /// Signed angular offset `self − reference`, folded into `(−π, π]`.
    ///
    /// Positive means `self` lies ahead of `reference` along the direction of
    /// increasing longitude.
    #[inline]
    pub fn signed_offset(self, reference: Longitude) -> f64 {
        wrap_pi(self.0 - reference.0)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
