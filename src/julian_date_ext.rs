// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use chrono::{TimeZone, Utc};
use qtty::*;

use super::instant::Time;
use super::scales::JD;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// One Julian millennium expressed in days.
    pub const JULIAN_MILLENNIUM: Days = Days::new(365_250.0);

    /// Julian millennia since J2000.0 (the VSOP87 time argument τ).
    #[inline]
    pub fn julian_millennias(&self) -> Millennia {
        Millennia::new(
            ((*self - Self::J2000) / Self::JULIAN_MILLENNIUM)
                .simplify()
                .value(),
        )
    }

    /// Julian centuries since J2000.0 (nutation arguments, FK5 terms).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Instant of 1 January `year`, 00:00 UTC, on the TT axis.
    ///
    /// Returns `None` when chrono cannot represent that civil date.
    pub fn start_of_year(year: i32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .map(Self::from_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_conversions() {
        let jd = Time::<JD>::J2000 + Days::new(365_250.0);
        assert!((jd.julian_millennias() - Millennia::new(1.0)).abs() < 1e-12);
        assert!((jd.julian_centuries() - Centuries::new(10.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn test_start_of_year_includes_delta_t() {
        // 2024-01-01T00:00 UT is JD 2 460 310.5; TT runs ~74 s ahead.
        let jd = Time::<JD>::start_of_year(2024).expect("representable");
        let offset = (jd - Time::<JD>::new(2_460_310.5)).to::<Second>();
        assert!(offset > Seconds::new(60.0) && offset < Seconds::new(90.0));
    }

    #[test]
    fn test_consecutive_years_are_a_year_apart() {
        let a = Time::<JD>::start_of_year(2023).unwrap();
        let b = Time::<JD>::start_of_year(2024).unwrap();
        let c = Time::<JD>::start_of_year(2025).unwrap();
        assert!(((b - a) - Days::new(365.0)).abs() < Days::new(1e-3));
        assert!(((c - b) - Days::new(366.0)).abs() < Days::new(1e-3));
    }

    #[test]
    fn test_start_of_year_out_of_chrono_range() {
        assert!(Time::<JD>::start_of_year(i32::MAX).is_none());
    }
}
