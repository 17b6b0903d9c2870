// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Refined solar-term instants paired with their labels.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::terms::TermAngle;
use crate::JulianDate;

/// One solar term occurrence.
///
/// `julian_day` is the refined instant on the TT axis; `instant` is the same
/// moment as civil UTC, obtained by removing ΔT once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermRecord {
    pub term: TermAngle,
    pub julian_day: JulianDate,
    pub instant: DateTime<Utc>,
}

impl TermRecord {
    /// Builds a record, converting `julian_day` to UTC.
    ///
    /// # Errors
    ///
    /// [`Error::UnrepresentableInstant`] when chrono cannot hold the instant.
    pub fn new(term: TermAngle, julian_day: JulianDate) -> Result<Self> {
        let instant = julian_day
            .to_utc()
            .ok_or(Error::UnrepresentableInstant {
                jd: julian_day.value(),
            })?;
        Ok(Self {
            term,
            julian_day,
            instant,
        })
    }

    /// The instant in a local time zone.
    pub fn local_time<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        self.instant.with_timezone(zone)
    }
}

/// Pairs each refined instant with its term and sorts ascending by instant.
///
/// Duplicates are kept.
pub fn build_records<I>(refined: I) -> Result<Vec<TermRecord>>
where
    I: IntoIterator<Item = (TermAngle, JulianDate)>,
{
    let mut records = refined
        .into_iter()
        .map(|(term, julian_day)| TermRecord::new(term, julian_day))
        .collect::<Result<Vec<_>>>()?;
    records.sort_by(|a, b| a.julian_day.value().total_cmp(&b.julian_day.value()));
    Ok(records)
}
