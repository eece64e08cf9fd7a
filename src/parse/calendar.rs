//! Calendar arithmetic used by the quick-add parser.
//!
//! Arithmetic works on local wall-clock `NaiveDateTime`s. Every operation
//! returns `None` instead of panicking when the result is not a valid date.

use chrono::{
    DateTime, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta,
    TimeZone, Timelike, Utc,
};

pub fn add_days(dt: NaiveDateTime, days: u64) -> Option<NaiveDateTime> {
    dt.checked_add_days(Days::new(days))
}

pub fn add_weeks(dt: NaiveDateTime, weeks: u64) -> Option<NaiveDateTime> {
    add_days(dt, weeks.checked_mul(7)?)
}

/// Adds calendar months, clamping the day to the end of a shorter month
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(dt: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    dt.checked_add_months(Months::new(months))
}

/// Parse `YYYY-MM-DD` as local midnight
pub fn parse_iso_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Local midnight of the given day; `month` is 1-based
pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

/// Replace the hour and then the minute of `dt`, keeping seconds.
///
/// Values past 23 hours or 59 minutes carry into the following hours and
/// days, so `at 25` on Jan 2 lands on Jan 3 01:00.
pub fn set_time_of_day(dt: NaiveDateTime, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let start_of_day = dt.with_hour(0)?.with_minute(0)?;
    start_of_day
        .checked_add_signed(TimeDelta::hours(i64::from(hour)))?
        .checked_add_signed(TimeDelta::minutes(i64::from(minute)))
}

/// ISO-8601 instant with millisecond precision and a `Z` suffix, the form
/// stored in exported task lists
pub fn to_iso_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resolve a wall-clock time in `tz` to a UTC instant.
///
/// Ambiguous times (DST fall-back) take the earlier instant. Times inside a
/// DST gap are pushed forward by an hour.
pub fn to_instant<Tz: TimeZone>(dt: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    if let Some(resolved) = tz.from_local_datetime(&dt).earliest() {
        return resolved.with_timezone(&Utc);
    }
    dt.checked_add_signed(TimeDelta::hours(1))
        .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
        .map(|resolved| resolved.with_timezone(&Utc))
        .unwrap_or_else(|| dt.and_utc())
}
