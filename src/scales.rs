// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale markers used by the solar-term search.
//!
//! | Marker | Axis | Used for |
//! |--------|------|----------|
//! | [`JD`] | Julian Date on TT | ephemeris evaluation, scanning, bisection |
//! | [`UT`] | Julian Date on UT | the bridge to civil UTC timestamps |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date on the uniform TT axis (identity scale).
///
/// `to_jd_tt(v) = v`; the quantity *is* the Julian Ephemeris Day that the
/// solar theory expects.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Universal Time, the civil scale tied to Earth's rotation.
///
/// The quantity is a Julian Day on the **UT** axis.  Conversion to JD(TT)
/// adds ΔT; the inverse solves `ut + ΔT(ut) = tt` by fixed-point iteration.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        let jd_ut = super::instant::Time::<JD>::from_days(ut_value);
        let dt_secs = super::delta_t::delta_t_seconds_from_ut(jd_ut);
        ut_value + dt_secs.to::<qtty::Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        // dΔT/dJD is ~1e-8, three rounds are well past f64 resolution.
        let mut ut = jd_tt;
        for _ in 0..3 {
            let jd_ut = super::instant::Time::<JD>::from_days(ut);
            let dt_days = super::delta_t::delta_t_seconds_from_ut(jd_ut).to::<qtty::Day>();
            ut = jd_tt - dt_days;
        }
        ut
    }
}

impl From<super::instant::Time<JD>> for super::instant::Time<UT> {
    #[inline]
    fn from(t: super::instant::Time<JD>) -> Self {
        t.to::<UT>()
    }
}

impl From<super::instant::Time<UT>> for super::instant::Time<JD> {
    #[inline]
    fn from(t: super::instant::Time<UT>) -> Self {
        t.to::<JD>()
    }
}
