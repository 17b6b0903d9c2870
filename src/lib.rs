// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar terms (節氣)
//!
//! Finds the instants at which the Sun's apparent geocentric ecliptic
//! longitude crosses each multiple of 15°, and writes them out as calendar
//! events.
//!
//! # Pipeline
//!
//! 1. [`scan`](scan::scan) walks a [`YearSpan`] in fixed steps and reports
//!    every step whose longitude arc passes a [`TermAngle`].
//! 2. [`refine`](refine::refine) bisects each bracket to sub-second
//!    precision.
//! 3. [`build_records`] pairs the instants with their terms and sorts them.
//! 4. [`CalendarEmitter`] (or [`write_json`]) serializes the records.
//!
//! [`SolarTermFinder`] runs steps 1–3 in one call.
//!
//! # Time
//!
//! All arithmetic happens on the continuous TT axis ([`JulianDate`] =
//! [`Time<JD>`]).  Civil UTC enters through [`Time::from_utc`] and leaves
//! through [`Time::to_utc`]; both apply **ΔT = TT − UT**, which is also
//! available via [`Time::<UT>::delta_t()`](Time::delta_t).
//!
//! # Example
//!
//! ```
//! use jieqi::{SolarTermFinder, YearSpan};
//!
//! let records = SolarTermFinder::new().find(YearSpan::single(2024))?;
//! let solstice = records.iter().find(|r| r.term.name == "冬至").unwrap();
//! assert_eq!(solstice.instant.format("%Y-%m-%d").to_string(), "2024-12-21");
//! # Ok::<(), jieqi::Error>(())
//! ```

mod delta_t;
pub(crate) mod instant;
mod julian_date_ext;
mod period;
pub(crate) mod scales;
mod vsop87;

pub mod angle;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod finder;
pub mod ics;
pub mod json;
pub mod record;
pub mod refine;
pub mod scan;
pub mod terms;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::Longitude;
pub use config::{Config, OutputFormat};
pub use ephemeris::{Ephemeris, Vsop87Sun};
pub use error::{Error, Result};
pub use finder::SolarTermFinder;
pub use ics::{CalendarEmitter, CalendarOptions};
pub use instant::{Time, TimeScale};
pub use json::write_json;
pub use period::{Period, Steps};
pub use record::{build_records, TermRecord};
pub use scales::{JD, UT};
pub use scan::{Crossing, YearSpan};
pub use terms::{TermAngle, SOLAR_TERMS};

/// Julian Date on the TT axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Universal Time (Earth rotation).
///
/// This is a type alias for [`Time<UT>`].
pub type UniversalTime = Time<UT>;
