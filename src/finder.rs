// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Scan, refine and collect in one call.

use qtty::Days;
use tracing::{debug, info, info_span, trace};

use crate::angle::Longitude;
use crate::ephemeris::{Ephemeris, Vsop87Sun};
use crate::error::Result;
use crate::record::{build_records, TermRecord};
use crate::refine::{refine, validate_iterations, DEFAULT_ITERATIONS};
use crate::scan::{scan, validate_step, Crossing, YearSpan, DEFAULT_STEP};
use crate::terms::{TermAngle, SOLAR_TERMS};
use crate::JulianDate;

/// Solar-term search over an [`Ephemeris`].
///
/// # Examples
///
/// ```
/// use jieqi::{SolarTermFinder, YearSpan};
///
/// let records = SolarTermFinder::new().find(YearSpan::single(2024)).unwrap();
/// assert_eq!(records.len(), 24);
/// assert_eq!(records[0].term.name, "小寒");
/// ```
#[derive(Debug, Clone)]
pub struct SolarTermFinder<E> {
    ephemeris: E,
    table: Vec<TermAngle>,
    step: Days,
    iterations: u32,
}

impl SolarTermFinder<Vsop87Sun> {
    /// Finder over [`Vsop87Sun`] with the full table, one-day steps and
    /// [`DEFAULT_ITERATIONS`] bisection rounds.
    pub fn new() -> Self {
        Self::with_ephemeris(Vsop87Sun)
    }
}

impl Default for SolarTermFinder<Vsop87Sun> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ephemeris> SolarTermFinder<E> {
    pub fn with_ephemeris(ephemeris: E) -> Self {
        Self {
            ephemeris,
            table: SOLAR_TERMS.to_vec(),
            step: DEFAULT_STEP,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Replaces the term table.
    pub fn with_table(mut self, table: &[TermAngle]) -> Self {
        self.table = table.to_vec();
        self
    }

    /// Sets the scan step.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidStep`] outside `(0, 10]` days.
    pub fn with_step(mut self, step: Days) -> Result<Self> {
        validate_step(step)?;
        self.step = step;
        Ok(self)
    }

    /// Sets the number of bisection rounds.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIterations`] for zero.
    pub fn with_iterations(mut self, iterations: u32) -> Result<Self> {
        validate_iterations(iterations)?;
        self.iterations = iterations;
        Ok(self)
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn table(&self) -> &[TermAngle] {
        &self.table
    }

    pub fn step(&self) -> Days {
        self.step
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Coarse crossings in `span`, in scan order.
    pub fn scan(&self, span: YearSpan) -> Result<Vec<Crossing>> {
        scan(&self.ephemeris, span, self.step, &self.table)
    }

    /// Refined instant of one crossing.
    pub fn refine(&self, crossing: &Crossing) -> Result<JulianDate> {
        refine(
            &self.ephemeris,
            crossing.bracket,
            Longitude::from_degrees(crossing.term.degrees),
            self.iterations,
        )
    }

    /// All term records in `span`, ascending by instant.
    pub fn find(&self, span: YearSpan) -> Result<Vec<TermRecord>> {
        let _span = info_span!("find", first = span.first(), last = span.last()).entered();

        let crossings = self.scan(span)?;
        debug!(crossings = crossings.len(), step_days = self.step.value(), "scan complete");

        let refined = crossings
            .iter()
            .map(|crossing| -> Result<(TermAngle, JulianDate)> {
                let instant = self.refine(crossing)?;
                trace!(term = crossing.term.name, jd = instant.value(), "refined");
                Ok((crossing.term, instant))
            })
            .collect::<Result<Vec<_>>>()?;

        let records = build_records(refined)?;
        info!(records = records.len(), "solar terms resolved");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn builder_validates() {
        let finder = SolarTermFinder::new();
        assert!(matches!(
            finder.clone().with_step(Days::new(0.0)),
            Err(Error::InvalidStep { .. })
        ));
        assert!(matches!(
            finder.clone().with_iterations(0),
            Err(Error::InvalidIterations { iterations: 0 })
        ));
        let tuned = finder
            .with_step(Days::new(2.0))
            .unwrap()
            .with_iterations(20)
            .unwrap();
        assert_eq!(tuned.step(), Days::new(2.0));
        assert_eq!(tuned.iterations(), 20);
        assert_eq!(tuned.table().len(), 24);
    }

    #[test]
    fn reduced_table_finds_only_solstices() {
        let table = [SOLAR_TERMS[6], SOLAR_TERMS[18]];
        let records = SolarTermFinder::new()
            .with_table(&table)
            .find(YearSpan::single(2024))
            .unwrap();
        let names: Vec<_> = records.iter().map(|r| r.term.name).collect();
        assert_eq!(names, ["夏至", "冬至"]);
    }

    #[test]
    fn coarser_step_gives_the_same_instants() {
        let span = YearSpan::single(2025);
        let daily = SolarTermFinder::new().find(span).unwrap();
        let weekly = SolarTermFinder::new()
            .with_step(Days::new(7.0))
            .unwrap()
            .find(span)
            .unwrap();
        assert_eq!(daily.len(), weekly.len());
        for (a, b) in daily.iter().zip(&weekly) {
            assert_eq!(a.term, b.term);
            let diff_s = (a.julian_day - b.julian_day).value().abs() * 86_400.0;
            assert!(diff_s < 1e-3, "{}: {diff_s} s", a.term.name);
        }
    }

    #[test]
    fn injected_ephemeris_is_used() {
        // One degree per day, 0° at JD 2460311.0
        let synthetic = |t: JulianDate| -> Result<Longitude> {
            Ok(Longitude::from_degrees(t.value() - 2_460_311.0))
        };
        let finder = SolarTermFinder::with_ephemeris(synthetic);
        let crossings = finder.scan(YearSpan::single(2024)).unwrap();
        // 359.5° → 365.5°: 0°, 15°, …, 345°, then 0° again
        assert_eq!(crossings.len(), 25);
        assert_eq!(crossings[0].term.degrees, 0.0);
        let first = finder.refine(&crossings[0]).unwrap();
        assert!((first.value() - 2_460_311.0).abs() < 1e-6);
    }

    #[test]
    fn searchable_years_stop_at_5998() {
        let last = YearSpan::single(5998).period().unwrap();
        assert!(last.end <= Vsop87Sun::MAX_JD);
        let first = YearSpan::single(-2000).period().unwrap();
        assert!(first.start >= Vsop87Sun::MIN_JD);

        // The end of 5999 (UTC) lands past 6000-01-01 TT once ΔT is added.
        let beyond = YearSpan::single(5999).period().unwrap();
        assert!(beyond.end > Vsop87Sun::MAX_JD);

        let finder = SolarTermFinder::new();
        assert_eq!(finder.find(YearSpan::single(5998)).unwrap().len(), 24);
        assert!(matches!(
            finder.find(YearSpan::single(5999)),
            Err(Error::EphemerisRange { .. })
        ));
    }
}
