// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar longitude providers.
//!
//! The search only needs one thing from an ephemeris: the Sun's apparent
//! geocentric ecliptic longitude at an instant on the TT axis, referred to
//! the equinox of that same instant.  [`Ephemeris`] is that boundary.
//!
//! [`Vsop87Sun`] is the bundled provider.  Any closure
//! `Fn(JulianDate) -> Result<Longitude>` is an [`Ephemeris`] as well, which
//! is how synthetic longitude curves are injected in tests.

use std::f64::consts::PI;

use crate::angle::Longitude;
use crate::error::{Error, Result};
use crate::vsop87::{self, EARTH_L, EARTH_R};
use crate::{JulianDate, Period};

/// Instant → apparent geocentric solar longitude (radians, equinox of date).
pub trait Ephemeris {
    /// Apparent longitude of the Sun at `instant`.
    ///
    /// # Errors
    ///
    /// [`Error::EphemerisRange`] when `instant` lies outside the provider's
    /// validity range.  Providers never extrapolate.
    fn longitude_at(&self, instant: JulianDate) -> Result<Longitude>;
}

impl<F> Ephemeris for F
where
    F: Fn(JulianDate) -> Result<Longitude>,
{
    #[inline]
    fn longitude_at(&self, instant: JulianDate) -> Result<Longitude> {
        self(instant)
    }
}

/// FK5 frame correction in longitude, arcseconds.
const FK5_CORRECTION_ARCSEC: f64 = -0.090_33;

/// Constant of annual aberration times 1 AU, arcseconds.
const ABERRATION_ARCSEC: f64 = -20.489_8;

#[inline]
fn arcsec_to_rad(arcsec: f64) -> f64 {
    (arcsec / 3600.0).to_radians()
}

/// Nutation in longitude Δψ in arcseconds, four-term IAU 1980 abridgement
/// (good to about 0.5″).  `t` is Julian centuries from J2000.0 (TT).
fn nutation_in_longitude(t: f64) -> f64 {
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let sun = (280.466_5 + 36_000.769_8 * t).to_radians();
    let moon = (218.316_5 + 481_267.881_3 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Sun position from the truncated VSOP87D Earth series.
///
/// The series are referred to the mean equinox of date, so precession is
/// already included; FK5, nutation and aberration corrections are applied on
/// top.  Accuracy is about one arcsecond over the validity range, which puts
/// solar-term instants within a minute or so of the full theory.
///
/// # Examples
///
/// ```
/// use jieqi::{Ephemeris, JulianDate, Vsop87Sun};
///
/// // 1992-10-13 00:00 TT (Meeus, example 25.b)
/// let lon = Vsop87Sun.longitude_at(JulianDate::new(2_448_908.5)).unwrap();
/// assert!((lon.degrees() - 199.906).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vsop87Sun;

impl Vsop87Sun {
    /// First supported instant: JD 990 574.5 (TT), −2000-01-01 00:00 TT.
    pub const MIN_JD: JulianDate = JulianDate::new(990_574.5);

    /// Last supported instant: JD 3 912 514.5 (TT), 6000-01-01 00:00 TT.
    ///
    /// Year spans are bounded by UTC midnights, which sit ΔT (about 0.65 day
    /// by then) later on the TT axis, so 5998 is the last whole year that can
    /// be searched.
    pub const MAX_JD: JulianDate = JulianDate::new(3_912_514.5);

    /// The validity range as a period; both ends are accepted.
    pub fn validity() -> Period<crate::JD> {
        Period::new(Self::MIN_JD, Self::MAX_JD)
    }

    fn check_range(instant: JulianDate) -> Result<()> {
        let range = Self::validity();
        if instant >= range.start && instant <= range.end {
            Ok(())
        } else {
            Err(Error::EphemerisRange {
                jd: instant.value(),
                min: range.start.value(),
                max: range.end.value(),
            })
        }
    }
}

impl Ephemeris for Vsop87Sun {
    fn longitude_at(&self, instant: JulianDate) -> Result<Longitude> {
        Self::check_range(instant)?;

        let tau = instant.julian_millennias().value();
        let t = instant.julian_centuries().value();

        let heliocentric = vsop87::evaluate(&EARTH_L, tau);
        let radius = vsop87::evaluate(&EARTH_R, tau);

        let geometric = heliocentric + PI;
        let corrections =
            FK5_CORRECTION_ARCSEC + nutation_in_longitude(t) + ABERRATION_ARCSEC / radius;

        Ok(Longitude::from_radians(geometric + arcsec_to_rad(corrections)))
    }
}
