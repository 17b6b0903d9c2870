// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the solar-term search and its emitters.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all fallible operations in this crate.
///
/// Nothing here is retried: the computation is deterministic, so a failure
/// either points at the inputs or at the ephemeris provider.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ephemeris was asked for an instant outside its validity range.
    #[error("JD {jd} (TT) is outside the ephemeris validity range [{min}, {max}]")]
    EphemerisRange {
        /// Requested Julian Day (TT).
        jd: f64,
        /// First supported Julian Day (TT).
        min: f64,
        /// Last supported Julian Day (TT).
        max: f64,
    },

    /// `first` year is after `last`.
    #[error("invalid year span {first}..={last}: first year is after last year")]
    InvalidYearSpan { first: i32, last: i32 },

    /// A civil date could not be built for this year.
    #[error("year {year} cannot be represented as a calendar date")]
    UnrepresentableYear { year: i32 },

    /// Scan step outside `(0, 10]` days.
    #[error("scan step must be finite and within (0, 10] days, got {step_days}")]
    InvalidStep { step_days: f64 },

    /// Bisection needs at least one round.
    #[error("bisection iterations must be >= 1, got {iterations}")]
    InvalidIterations { iterations: u32 },

    /// A refined instant falls outside chrono's UTC range.
    #[error("instant JD {jd} (TT) cannot be represented as a UTC timestamp")]
    UnrepresentableInstant { jd: f64 },

    /// The timezone name is not in the IANA database.
    #[error("unknown time zone {name:?}")]
    UnknownTimeZone { name: String },

    /// Reading or parsing the configuration failed.
    #[error("configuration error in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// Writing the output resource failed.
    #[error("failed to write {}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing records to JSON failed.
    #[error("failed to serialize records to JSON")]
    Json(#[from] serde_json::Error),
}
