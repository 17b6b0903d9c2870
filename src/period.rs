// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time brackets.
//!
//! A [`Period<S>`] is the half-open interval `[start, end)` on time scale
//! `S`.  The scanner hands the refiner one `Period<JD>` per detected
//! crossing, and the refiner shrinks it by halving.

use super::{Time, TimeScale};
use qtty::Days;
use std::fmt;

/// Half-open time interval `[start, end)` on scale `S`.
///
/// # Examples
///
/// ```
/// use jieqi::{JulianDate, Period};
/// use qtty::Days;
///
/// let day = Period::new(JulianDate::new(2_460_389.5), JulianDate::new(2_460_390.5));
/// assert_eq!(day.duration(), Days::new(1.0));
/// assert_eq!(day.midpoint(), JulianDate::new(2_460_390.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period<S: TimeScale> {
    pub start: Time<S>,
    pub end: Time<S>,
}

impl<S: TimeScale> Period<S> {
    /// Creates a new period between two instants.
    pub fn new(start: Time<S>, end: Time<S>) -> Self {
        Period { start, end }
    }

    /// Length of the period, `end − start`.
    pub fn duration(&self) -> Days {
        self.end - self.start
    }

    /// The instant halfway between `start` and `end`.
    pub fn midpoint(&self) -> Time<S> {
        self.start.mean(self.end)
    }

    /// Splits the period into consecutive sub-periods of at most `step`.
    ///
    /// Every sub-period except possibly the last has length `step`; the last
    /// one is clamped to `end`.  Boundaries are computed as `start + k·step`
    /// so rounding does not accumulate over long spans.  A non-positive or
    /// non-finite `step` yields no steps.
    pub fn steps(&self, step: Days) -> Steps<S> {
        Steps {
            period: *self,
            step,
            index: 0,
        }
    }
}

impl<S: TimeScale> fmt::Display for Period<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator returned by [`Period::steps`].
#[derive(Debug, Clone)]
pub struct Steps<S: TimeScale> {
    period: Period<S>,
    step: Days,
    index: u64,
}

impl<S: TimeScale> Iterator for Steps<S> {
    type Item = Period<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.step.value();
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let start = self.period.start + Days::new(step * self.index as f64);
        if start >= self.period.end {
            return None;
        }
        let end = (self.period.start + Days::new(step * (self.index + 1) as f64))
            .min(self.period.end);
        self.index += 1;
        Some(Period::new(start, end))
    }
}
