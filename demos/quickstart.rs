use chrono::{Datelike, Utc};
use chrono_tz::Asia::Taipei;
use jieqi::{JulianDate, SolarTermFinder, UniversalTime, YearSpan, UT};

fn main() -> jieqi::Result<()> {
    let now_jd = JulianDate::from_utc(Utc::now());
    let now_ut: UniversalTime = now_jd.to::<UT>();
    println!("JD(TT): {now_jd}");
    println!("ΔT: {}", now_ut.delta_t());

    let year = Utc::now().with_timezone(&Taipei).year();
    for record in SolarTermFinder::new().find(YearSpan::single(year))? {
        println!(
            "{:>3}°  {}  {:<12}  {}",
            record.term.degrees,
            record.term.name,
            record.term.pinyin,
            record.local_time(&Taipei).format("%Y-%m-%d %H:%M:%S"),
        );
    }
    Ok(())
}
