use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Asia::Taipei;
use qtty::{Day, Seconds};
use jieqi::{
    CalendarEmitter, JulianDate, SolarTermFinder, TermRecord, Time, YearSpan, JD, SOLAR_TERMS, UT,
};

fn records_for(span: YearSpan) -> Vec<TermRecord> {
    SolarTermFinder::new().find(span).expect("search")
}

fn find<'a>(records: &'a [TermRecord], name: &str) -> &'a TermRecord {
    records
        .iter()
        .find(|r| r.term.name == name)
        .unwrap_or_else(|| panic!("{name} not found"))
}

fn minutes_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_milliseconds().abs() as f64 / 60_000.0
}

#[test]
fn utc_roundtrip_j2000_is_stable() {
    let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
    let jd = JulianDate::from_utc(datetime);
    let back = jd.to_utc().expect("to_utc");
    let delta_ns = back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
    assert!(delta_ns.abs() < 200_000);
}

#[test]
fn ut_applies_delta_t_near_j2000() {
    let ut = Time::<UT>::new(2_451_545.0);
    let jd: JulianDate = ut.to::<JD>();
    let offset = (jd.quantity() - ut.quantity()).to::<Day>();
    let offset_s = offset.to::<qtty::Second>();
    assert!((offset_s - Seconds::new(63.83)).abs() < Seconds::new(1.0));
}

#[test]
fn solstices_and_equinoxes_2024() {
    let records = records_for(YearSpan::single(2024));
    // Published instants (UTC), rounded to the minute
    let expected = [
        ("春分", Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap()),
        ("夏至", Utc.with_ymd_and_hms(2024, 6, 20, 20, 51, 0).unwrap()),
        ("秋分", Utc.with_ymd_and_hms(2024, 9, 22, 12, 44, 0).unwrap()),
        ("冬至", Utc.with_ymd_and_hms(2024, 12, 21, 9, 21, 0).unwrap()),
    ];
    for (name, when) in expected {
        let record = find(&records, name);
        let off = minutes_between(record.instant, when);
        assert!(off < 2.0, "{name}: {} is {off:.2} min from {when}", record.instant);
    }
}

#[test]
fn local_dates_2024() {
    let records = records_for(YearSpan::single(2024));

    let winter = find(&records, "冬至").local_time(&Taipei);
    assert_eq!(winter.month(), 12);
    assert!((21..=22).contains(&winter.day()));

    let spring = find(&records, "春分").local_time(&Taipei);
    assert_eq!(spring.month(), 3);
    assert!((19..=21).contains(&spring.day()));
}

#[test]
fn each_term_once_per_year() {
    let records = records_for(YearSpan::new(2024, 2026).unwrap());
    assert_eq!(records.len(), 72);
    for year in 2024..=2026 {
        for term in &SOLAR_TERMS {
            let n = records
                .iter()
                .filter(|r| r.term == *term && r.instant.year() == year)
                .count();
            assert_eq!(n, 1, "{} in {year}", term.name);
        }
    }
}

#[test]
fn instants_increase_by_about_fifteen_days() {
    let records = records_for(YearSpan::new(2024, 2025).unwrap());
    for pair in records.windows(2) {
        let gap = (pair[1].julian_day - pair[0].julian_day).value();
        assert!(
            (14.0..=16.0).contains(&gap),
            "{} → {}: {gap} days",
            pair[0].term.name,
            pair[1].term.name
        );
        let step = (pair[1].term.degrees - pair[0].term.degrees).rem_euclid(360.0);
        assert_eq!(step, 15.0);
    }
}

#[test]
fn search_is_idempotent() {
    let span = YearSpan::single(2025);
    let a = records_for(span);
    let b = records_for(span);
    assert_eq!(a, b);
}

#[test]
fn ics_file_round_trip() {
    let records = records_for(YearSpan::single(2024));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solar_terms.ics");

    CalendarEmitter::default().write(&path, &records).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(text.matches("BEGIN:VEVENT\r\n").count(), 24);
    assert_eq!(text.matches("\r\n").count(), text.matches('\n').count());
    assert!(text.contains("DTSTART;VALUE=DATE:20241221\r\n"));
    assert!(text.contains("SUMMARY:冬至\r\n"));
    assert!(text.contains("DESCRIPTION:冬至 精確時間: 2024-12-21 17:2"));
}
