// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): the UT↔TT correction
//!
//! Solar terms are published against civil time, but the solar theory runs
//! on Terrestrial Time.  The gap between the two, **ΔT = TT − UT**, is about
//! 70 s today, which moves every solar-term instant by the same amount, so it
//! is applied on every UTC↔TT conversion.
//!
//! The [`UT`](super::UT) scale marker calls into this module; callers get the
//! correction through [`Time::from_utc`](super::Time::from_utc) and
//! [`Time::to_utc`](super::Time::to_utc) without touching it directly.
//!
//! ```rust
//! use jieqi::{Time, JD, UT};
//!
//! let ut = Time::<UT>::new(2_460_310.5); // 2024-01-01T00:00 UT
//! let jd_tt = ut.to::<JD>();
//! assert!(jd_tt.value() > ut.value());
//! println!("ΔT = {}", ut.delta_t());
//! ```
//!
//! ## Model
//!
//! | Years | Source |
//! |-------|--------|
//! | < 948 | Stephenson & Houlden (1986), quadratic |
//! | 948–1600 | Stephenson & Houlden (1986), second quadratic |
//! | 1600–1992 | Meeus biennial table, interpolated |
//! | 1992–2005 | Meeus' 1990/2000/2010 values, interpolated |
//! | 2005–2050 | Espenak & Meeus (2006) polynomial |
//! | 2050–2150 | Espenak & Meeus (2006) polynomial |
//! | > 2150 | Morrison & Stephenson (2004) long-term parabola |
//!
//! Uncertainty is a few seconds for the present century, which keeps the
//! solar-term instants well inside their sub-minute target.

use super::{JulianDate, UniversalTime};
use qtty::{Days, Seconds, Simplify};

/// Total number of tabulated terms (biennial 1620–1992).
const TERMS: usize = 187;

/// Biennial ΔT table from 1620 to 1992 (in seconds), compiled by J. Meeus.
#[rustfmt::skip]
const DELTA_T: [Seconds; TERMS] = qtty::qtty_vec!(
    Seconds;
    124.0,115.0,106.0, 98.0, 91.0, 85.0, 79.0, 74.0, 70.0, 65.0,
     62.0, 58.0, 55.0, 53.0, 50.0, 48.0, 46.0, 44.0, 42.0, 40.0,
     37.0, 35.0, 33.0, 31.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0,
     16.0, 14.0, 13.0, 12.0, 11.0, 10.0,  9.0,  9.0,  9.0,  9.0,
      9.0,  9.0,  9.0,  9.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0,
     11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0,
     12.0, 12.0, 13.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0,
     15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 17.0, 17.0,
     17.0, 17.0, 17.0, 17.0, 17.0, 17.0, 16.0, 16.0, 15.0, 14.0,
     13.7, 13.1, 12.7, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.3,
     12.0, 11.4, 10.6,  9.6,  8.6,  7.5,  6.6,  6.0,  5.7,  5.6,
      5.7,  5.9,  6.2,  6.5,  6.8,  7.1,  7.3,  7.5,  7.7,  7.8,
      7.9,  7.5,  6.4,  5.4,  2.9,  1.6, -1.0, -2.7, -3.6, -4.7,
     -5.4, -5.2, -5.5, -5.6, -5.8, -5.9, -6.2, -6.4, -6.1, -4.7,
     -2.7,  0.0,  2.6,  5.4,  7.7, 10.5, 13.4, 16.0, 18.2, 20.2,
     21.2, 22.4, 23.5, 23.9, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
     24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
     33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
     50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3,
);

// Segment boundaries, Julian Day on the UT axis (00:00 on 1 January).
const JD_948: JulianDate = JulianDate::new(2_067_314.5);
const JD_1600: JulianDate = JulianDate::new(2_305_447.5);
const JD_1992: JulianDate = JulianDate::new(2_448_622.5);
const JD_2005: JulianDate = JulianDate::new(2_453_371.5);
const JD_2050: JulianDate = JulianDate::new(2_469_807.5);
const JD_2150: JulianDate = JulianDate::new(2_506_331.5);

/// **Years < 948 CE**
#[inline]
fn delta_t_ancient(jd: JulianDate) -> Seconds {
    const DT_A0_S: Seconds = Seconds::new(1_830.0);
    const DT_A1_S: Seconds = Seconds::new(-405.0);
    const DT_A2_S: Seconds = Seconds::new(46.5);
    let c = days_ratio(jd - JD_948, JulianDate::JULIAN_CENTURY);
    DT_A0_S + DT_A1_S * c + DT_A2_S * c * c
}

/// **Years 948–1600 CE**
#[inline]
fn delta_t_medieval(jd: JulianDate) -> Seconds {
    const JD_EPOCH_1850_UT: JulianDate = JulianDate::new(2_396_758.5);
    const DT_A2_S: Seconds = Seconds::new(22.5);

    let c = days_ratio(jd - JD_EPOCH_1850_UT, JulianDate::JULIAN_CENTURY);
    DT_A2_S * c * c
}

/// **Years 1600–1992**, interpolated from the biennial table.
#[inline]
fn delta_t_table(jd: JulianDate) -> Seconds {
    const JD_TABLE_START_1620: JulianDate = JulianDate::new(2_312_752.5);
    const BIENNIAL_STEP_D: Days = Days::new(730.5);

    // Dates between 1600 and 1620 clamp onto the first table row.
    let ratio = days_ratio(jd - JD_TABLE_START_1620, BIENNIAL_STEP_D).max(0.0);
    let mut i = ratio as usize;
    if i > TERMS - 3 {
        i = TERMS - 3;
    }
    let a: Seconds = DELTA_T[i + 1] - DELTA_T[i];
    let b: Seconds = DELTA_T[i + 2] - DELTA_T[i + 1];
    let c: Seconds = a - b;
    let n = days_ratio(
        jd - (JD_TABLE_START_1620 + BIENNIAL_STEP_D * i as f64),
        BIENNIAL_STEP_D,
    );
    DELTA_T[i + 1] + n / 2.0 * (a + b + n * c)
}

/// **Years 1992–2005**, from Meeus' values for 1990, 2000 and 2010.
#[inline]
fn delta_t_recent(jd: JulianDate) -> Seconds {
    const DT: [Seconds; 3] = [Seconds::new(56.86), Seconds::new(63.83), Seconds::new(70.0)];
    const JD_YEAR_2000_UT: JulianDate = JulianDate::new(2_451_544.5);
    const DECADE_D: Days = Days::new(3_652.5);

    let a = DT[1] - DT[0];
    let b = DT[2] - DT[1];
    let c = b - a;
    let n = days_ratio(jd - JD_YEAR_2000_UT, DECADE_D);
    DT[1] + n / 2.0 * (a + b + n * c)
}

/// **Years 2005–2050**: `62.92 + 0.32217 t + 0.005589 t²`, `t = y − 2000`.
#[inline]
fn delta_t_current(jd: JulianDate) -> Seconds {
    let t = decimal_year(jd) - 2000.0;
    Seconds::new(62.92 + 0.322_17 * t + 0.005_589 * t * t)
}

/// **Years 2050–2150**: `−20 + 32 u² − 0.5628 (2150 − y)`, `u = (y − 1820)/100`.
#[inline]
fn delta_t_near_future(jd: JulianDate) -> Seconds {
    let y = decimal_year(jd);
    let u = (y - 1820.0) / 100.0;
    Seconds::new(-20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y))
}

/// **Years > 2150**: `−20 + 32 u²`.
#[inline]
fn delta_t_long_term(jd: JulianDate) -> Seconds {
    let u = (decimal_year(jd) - 1820.0) / 100.0;
    Seconds::new(-20.0 + 32.0 * u * u)
}

/// Gregorian decimal year, accurate to a fraction of a day.
#[inline]
fn decimal_year(jd: JulianDate) -> f64 {
    const JD_YEAR_2000_UT: JulianDate = JulianDate::new(2_451_544.5);
    const GREGORIAN_YEAR_D: Days = Days::new(365.2425);
    2000.0 + days_ratio(jd - JD_YEAR_2000_UT, GREGORIAN_YEAR_D)
}

#[inline]
fn days_ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

/// Returns **ΔT** in seconds for a Julian Day on the **UT** axis.
#[inline]
pub(crate) fn delta_t_seconds_from_ut(jd_ut: JulianDate) -> Seconds {
    match jd_ut {
        jd if jd < JD_948 => delta_t_ancient(jd),
        jd if jd < JD_1600 => delta_t_medieval(jd),
        jd if jd < JD_1992 => delta_t_table(jd),
        jd if jd < JD_2005 => delta_t_recent(jd),
        jd if jd < JD_2050 => delta_t_current(jd),
        jd if jd < JD_2150 => delta_t_near_future(jd),
        _ => delta_t_long_term(jd_ut),
    }
}

impl UniversalTime {
    /// Returns **ΔT = TT − UT** in seconds for this UT epoch.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds_from_ut(JulianDate::from_days(self.quantity()))
    }
}
