// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! iCalendar (RFC 5545) output.
//!
//! Every record becomes an all-day `VEVENT` on the local date of the term,
//! with the exact local time in the description.  Lines end in CRLF, text
//! values are escaped, and content lines longer than 75 octets are folded on
//! character boundaries.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::record::TermRecord;

/// Default `X-WR-CALNAME`.
pub const DEFAULT_CALENDAR_NAME: &str = "24節氣";

/// Default `PRODID`.
pub const DEFAULT_PRODUCT_ID: &str = "-//Antigravity//Solar Terms//ZH";

/// Default display zone (UTC+8, no DST).
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Taipei;

const MAX_LINE_OCTETS: usize = 75;

/// Parses an IANA zone name.
///
/// # Errors
///
/// [`Error::UnknownTimeZone`] when the name is not in the database.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| Error::UnknownTimeZone {
        name: name.to_owned(),
    })
}

/// Calendar-level settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarOptions {
    pub name: String,
    pub product_id: String,
    /// Zone used for event dates and the description's clock time.
    pub timezone: Tz,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_CALENDAR_NAME.to_owned(),
            product_id: DEFAULT_PRODUCT_ID.to_owned(),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

/// Serializes [`TermRecord`]s as an iCalendar document.
#[derive(Debug, Clone, Default)]
pub struct CalendarEmitter {
    options: CalendarOptions,
}

impl CalendarEmitter {
    pub fn new(options: CalendarOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// Renders the document.  `dtstamp` is written to every event.
    pub fn render(&self, records: &[TermRecord], dtstamp: DateTime<Utc>) -> String {
        let mut out = String::new();
        let stamp = dtstamp.format("%Y%m%dT%H%M%SZ").to_string();

        push_line(&mut out, "BEGIN:VCALENDAR");
        push_line(&mut out, "VERSION:2.0");
        push_line(&mut out, &format!("PRODID:{}", self.options.product_id));
        push_line(&mut out, "METHOD:PUBLISH");
        push_line(
            &mut out,
            &format!("X-WR-CALNAME:{}", escape_text(&self.options.name)),
        );
        push_line(
            &mut out,
            &format!("X-WR-TIMEZONE:{}", self.options.timezone.name()),
        );

        for record in records {
            self.push_event(&mut out, record, &stamp);
        }

        push_line(&mut out, "END:VCALENDAR");
        out
    }

    fn push_event(&self, out: &mut String, record: &TermRecord, stamp: &str) {
        let local = record.local_time(&self.options.timezone);
        let offset = utc_offset_label(local.offset().fix().local_minus_utc());
        let name = escape_text(record.term.name);

        let description = format!(
            "{} 精確時間: {} ({offset})",
            record.term.name,
            local.format("%Y-%m-%d %H:%M:%S"),
        );

        push_line(out, "BEGIN:VEVENT");
        push_line(out, &format!("UID:{}", Uuid::new_v4()));
        push_line(out, &format!("DTSTAMP:{stamp}"));
        push_line(
            out,
            &format!("DTSTART;VALUE=DATE:{}", local.format("%Y%m%d")),
        );
        push_line(out, &format!("SUMMARY:{name}"));
        push_line(out, &format!("DESCRIPTION:{}", escape_text(&description)));
        push_line(out, "END:VEVENT");
    }

    /// Renders with the current time as `DTSTAMP` and writes UTF-8 bytes to
    /// `path`.
    ///
    /// # Errors
    ///
    /// [`Error::Output`] if the file cannot be written.
    pub fn write(&self, path: impl AsRef<Path>, records: &[TermRecord]) -> Result<()> {
        let path = path.as_ref();
        let document = self.render(records, Utc::now());
        fs::write(path, document.as_bytes()).map_err(|source| Error::Output {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), events = records.len(), "calendar written");
        Ok(())
    }
}

/// `UTC+8`, `UTC-5`, `UTC+5:30`, `UTC`.
fn utc_offset_label(seconds: i32) -> String {
    if seconds == 0 {
        return "UTC".to_owned();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (h, m) = (minutes / 60, minutes % 60);
    if m == 0 {
        format!("UTC{sign}{h}")
    } else {
        format!("UTC{sign}{h}:{m:02}")
    }
}

/// RFC 5545 §3.3.11 TEXT escaping.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Appends one content line, folded at 75 octets, terminated by CRLF.
fn push_line(out: &mut String, line: &str) {
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::SOLAR_TERMS;
    use crate::JulianDate;
    use chrono::TimeZone;

    fn winter_solstice_2024() -> TermRecord {
        // 2024-12-21 09:20 UTC, 17:20 in Taipei
        let instant = Utc.with_ymd_and_hms(2024, 12, 21, 9, 20, 30).unwrap()
            + chrono::Duration::milliseconds(500);
        TermRecord::new(SOLAR_TERMS[18], JulianDate::from_utc(instant)).unwrap()
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn document_structure() {
        let ics = CalendarEmitter::default().render(&[winter_solstice_2024()], stamp());
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("PRODID:-//Antigravity//Solar Terms//ZH\r\n"));
        assert!(ics.contains("METHOD:PUBLISH\r\n"));
        assert!(ics.contains("X-WR-CALNAME:24節氣\r\n"));
        assert!(ics.contains("X-WR-TIMEZONE:Asia/Taipei\r\n"));
        assert!(ics.contains("DTSTAMP:20260102T030405Z\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20241221\r\n"));
        assert!(ics.contains("SUMMARY:冬至\r\n"));
        assert!(ics.contains("DESCRIPTION:冬至 精確時間: 2024-12-21 17:20:30 (UTC+8)\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
        assert!(!ics.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn local_date_follows_timezone() {
        let options = CalendarOptions {
            timezone: parse_timezone("America/New_York").unwrap(),
            ..CalendarOptions::default()
        };
        let ics = CalendarEmitter::new(options).render(&[winter_solstice_2024()], stamp());
        assert!(ics.contains("X-WR-TIMEZONE:America/New_York\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20241221\r\n"));
        assert!(ics.contains("2024-12-21 04:20:30 (UTC-5)"));
    }

    #[test]
    fn uids_are_unique() {
        let record = winter_solstice_2024();
        let ics = CalendarEmitter::default().render(&[record, record], stamp());
        let uids: Vec<_> = ics.lines().filter(|l| l.starts_with("UID:")).collect();
        assert_eq!(uids.len(), 2);
        assert_ne!(uids[0], uids[1]);
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
        assert_eq!(escape_text("冬至 精確時間: 12:00"), "冬至 精確時間: 12:00");
    }

    #[test]
    fn long_lines_fold_on_char_boundaries() {
        let mut out = String::new();
        let line = format!("X-WR-CALNAME:{}", "節".repeat(40));
        push_line(&mut out, &line);
        let physical: Vec<&str> = out.trim_end_matches("\r\n").split("\r\n").collect();
        assert!(physical.len() > 1);
        for (i, part) in physical.iter().enumerate() {
            assert!(part.len() <= MAX_LINE_OCTETS, "{} octets", part.len());
            if i > 0 {
                assert!(part.starts_with(' '));
            }
        }
        let unfolded: String = physical
            .iter()
            .enumerate()
            .map(|(i, p)| if i == 0 { *p } else { &p[1..] })
            .collect();
        assert_eq!(unfolded, line);
    }

    #[test]
    fn offset_labels() {
        assert_eq!(utc_offset_label(8 * 3600), "UTC+8");
        assert_eq!(utc_offset_label(-5 * 3600), "UTC-5");
        assert_eq!(utc_offset_label(5 * 3600 + 1800), "UTC+5:30");
        assert_eq!(utc_offset_label(0), "UTC");
    }

    #[test]
    fn unknown_timezone() {
        assert!(matches!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(Error::UnknownTimeZone { .. })
        ));
        assert_eq!(parse_timezone("Asia/Taipei").unwrap(), DEFAULT_TIMEZONE);
    }

    #[test]
    fn write_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no/such/dir/out.ics");
        let err = CalendarEmitter::default()
            .write(&missing, &[winter_solstice_2024()])
            .unwrap_err();
        assert!(matches!(err, Error::Output { ref path, .. } if path == &missing));
    }
}
