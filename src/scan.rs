// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coarse crossing detection.
//!
//! The scanner walks a time range in fixed steps, samples the solar
//! longitude at every step boundary and reports each step whose longitude
//! arc passes one of the table's thresholds.  The resulting brackets are
//! handed to [`crate::refine`].

use std::fmt;

use qtty::Days;

use crate::angle::{arc_contains, Longitude};
use crate::ephemeris::Ephemeris;
use crate::error::{Error, Result};
use crate::terms::TermAngle;
use crate::{JulianDate, Period, JD};

/// Default scan step.
pub const DEFAULT_STEP: Days = Days::new(1.0);

/// Largest accepted scan step.  The Sun needs at least ~14.7 days to cover
/// 15°, so one step never spans two consecutive terms.
pub const MAX_STEP: Days = Days::new(10.0);

/// Inclusive span of Gregorian calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    first: i32,
    last: i32,
}

impl YearSpan {
    /// Span `first..=last`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidYearSpan`] if `first > last`.
    pub fn new(first: i32, last: i32) -> Result<Self> {
        if first > last {
            return Err(Error::InvalidYearSpan { first, last });
        }
        Ok(Self { first, last })
    }

    /// A single year.
    pub const fn single(year: i32) -> Self {
        Self {
            first: year,
            last: year,
        }
    }

    /// `count` consecutive years starting at `first` (`count == 0` is
    /// treated as one year).
    pub fn starting_at(first: i32, count: u32) -> Result<Self> {
        let extra = i32::try_from(count.saturating_sub(1))
            .map_err(|_| Error::UnrepresentableYear { year: first })?;
        let last = first
            .checked_add(extra)
            .ok_or(Error::UnrepresentableYear { year: first })?;
        Self::new(first, last)
    }

    pub const fn first(&self) -> i32 {
        self.first
    }

    pub const fn last(&self) -> i32 {
        self.last
    }

    /// `[1 Jan first 00:00 UTC, 1 Jan (last + 1) 00:00 UTC)` on the TT axis.
    ///
    /// # Errors
    ///
    /// [`Error::UnrepresentableYear`] if either boundary is outside chrono's
    /// calendar range.
    pub fn period(&self) -> Result<Period<JD>> {
        let start = JulianDate::start_of_year(self.first)
            .ok_or(Error::UnrepresentableYear { year: self.first })?;
        let after = self
            .last
            .checked_add(1)
            .ok_or(Error::UnrepresentableYear { year: self.last })?;
        let end = JulianDate::start_of_year(after)
            .ok_or(Error::UnrepresentableYear { year: after })?;
        Ok(Period::new(start, end))
    }
}

impl fmt::Display for YearSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}..={}", self.first, self.last)
        }
    }
}

/// A step in which the longitude passed `term.degrees`.
///
/// The longitude is at or before the threshold at `bracket.start` and past
/// it at `bracket.end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub bracket: Period<JD>,
    pub term: TermAngle,
}

/// Rejects steps that are non-finite, non-positive or above [`MAX_STEP`].
pub fn validate_step(step: Days) -> Result<()> {
    let days = step.value();
    if days.is_finite() && days > 0.0 && days <= MAX_STEP.value() {
        Ok(())
    } else {
        Err(Error::InvalidStep { step_days: days })
    }
}

/// Scans every year of `span` for crossings of the angles in `table`.
///
/// Equivalent to [`scan_period`] over [`YearSpan::period`].
pub fn scan<E>(
    ephemeris: &E,
    span: YearSpan,
    step: Days,
    table: &[TermAngle],
) -> Result<Vec<Crossing>>
where
    E: Ephemeris + ?Sized,
{
    scan_period(ephemeris, span.period()?, step, table)
}

/// Scans `range` in steps of `step` for crossings of the angles in `table`.
///
/// Boundaries sit at `range.start + k·step`; the last step is clamped to
/// `range.end`.  Crossings are returned in scan order.  Each boundary is
/// evaluated once: the end longitude of one step is the start of the next.
///
/// # Errors
///
/// [`Error::InvalidStep`] for an out-of-range step; ephemeris errors are
/// propagated as soon as they occur.
pub fn scan_period<E>(
    ephemeris: &E,
    range: Period<JD>,
    step: Days,
    table: &[TermAngle],
) -> Result<Vec<Crossing>>
where
    E: Ephemeris + ?Sized,
{
    validate_step(step)?;

    let mut crossings = Vec::new();
    let mut carried: Option<Longitude> = None;

    for bracket in range.steps(step) {
        let start = match carried.take() {
            Some(lon) => lon,
            None => ephemeris.longitude_at(bracket.start)?,
        };
        let end = ephemeris.longitude_at(bracket.end)?;

        let (from, to) = (start.degrees(), end.degrees());
        crossings.extend(
            table
                .iter()
                .filter(|term| arc_contains(from, to, term.degrees))
                .map(|term| Crossing {
                    bracket,
                    term: *term,
                }),
        );

        carried = Some(end);
    }

    Ok(crossings)
}
