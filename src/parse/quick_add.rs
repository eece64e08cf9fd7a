//! Quick-add parser: turns `Submit report tomorrow at 5pm !high @work` into a
//! [`ParsedTask`].
//!
//! Extraction is a fixed sequence of match-and-strip stages. Each stage scans
//! the residual text left by the previous one, so reordering the stages
//! changes results:
//!
//! 1. priority marker (`!high`, first one wins, all are stripped)
//! 2. tag markers (`@work`, every occurrence)
//! 3. time of day (`at 5pm`, `at 17:30`)
//! 4. relative date keyword (`today`, `tomorrow`, `next week`, `next month`)
//! 5. absolute date (`2024-03-15`, `3/15/2024`), which overwrites step 4
//!
//! The time of day is applied only when a date was found. Dates are worked
//! out on the wall clock of `now`'s time zone and returned as UTC instants.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use regex::{Captures, Regex};
use tracing::trace;

use crate::model::draft::{ParsedTask, UNTITLED_TASK};
use crate::model::task::Priority;
use crate::parse::calendar;

static PRIORITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)!(high|medium|low)").expect("priority pattern"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_]+)").expect("tag pattern"));

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)at ([0-9]{1,2})(?::([0-9]{2}))?\s?(am|pm)?").expect("time pattern")
});

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("iso date pattern"));

static US_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").expect("us date pattern")
});

type Resolver = fn(NaiveDateTime) -> Option<NaiveDateTime>;

/// Checked in this order; the first keyword present wins.
const DATE_KEYWORDS: &[(&str, Resolver)] = &[
    ("today", resolve_today),
    ("tomorrow", resolve_tomorrow),
    ("next week", resolve_next_week),
    ("next month", resolve_next_month),
];

fn resolve_today(now: NaiveDateTime) -> Option<NaiveDateTime> {
    Some(now)
}

fn resolve_tomorrow(now: NaiveDateTime) -> Option<NaiveDateTime> {
    calendar::add_days(now, 1)
}

fn resolve_next_week(now: NaiveDateTime) -> Option<NaiveDateTime> {
    calendar::add_weeks(now, 1)
}

fn resolve_next_month(now: NaiveDateTime) -> Option<NaiveDateTime> {
    calendar::add_months(now, 1)
}

/// A numeric date layout and how to build a date from its captures
struct DateFormat {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    build: fn(&Captures) -> Option<NaiveDateTime>,
}

/// Tried in order; the first one that yields a valid date stops the scan.
static DATE_FORMATS: [DateFormat; 2] = [
    DateFormat {
        name: "YYYY-MM-DD",
        pattern: &ISO_DATE_RE,
        build: build_iso_date,
    },
    DateFormat {
        name: "MM/DD/YYYY",
        pattern: &US_DATE_RE,
        build: build_us_date,
    },
];

fn build_iso_date(caps: &Captures) -> Option<NaiveDateTime> {
    calendar::parse_iso_date(caps.get(0)?.as_str())
}

fn build_us_date(caps: &Captures) -> Option<NaiveDateTime> {
    let month = caps.get(1)?.as_str().parse().ok()?;
    let day = caps.get(2)?.as_str().parse().ok()?;
    let year = caps.get(3)?.as_str().parse().ok()?;
    calendar::from_ymd(year, month, day)
}

/// Hour and minute captured from an `at ...` phrase, already in 24-hour form.
/// Not range-checked: `at 25` is kept as hour 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Apply an optional `am`/`pm` marker to a 12-hour clock reading
    fn from_clock(hour: u32, minute: u32, meridiem: Option<&str>) -> Self {
        let hour = match meridiem.map(str::to_ascii_lowercase).as_deref() {
            Some("pm") if hour != 12 => hour + 12,
            Some("am") if hour == 12 => 0,
            _ => hour,
        };
        TimeOfDay { hour, minute }
    }
}

/// Extract structured task fields from free text.
///
/// Total over all inputs: fragments that do not parse are left in the title.
/// Relative keywords and times of day are read on the wall clock of `now`'s
/// time zone; the resulting due date is the matching UTC instant.
pub fn extract<Tz: TimeZone>(input: &str, now: DateTime<Tz>) -> ParsedTask {
    let tz = now.timezone();
    let now = now.naive_local();
    let (priority, residual) = take_priority(input);
    let (tags, residual) = take_tags(&residual);
    let (time_of_day, residual) = take_time_of_day(&residual);
    let (relative_date, residual) = take_relative_date(&residual, now);
    let (absolute_date, residual) = take_absolute_date(&residual);

    // An absolute date overwrites a relative keyword even when both appear.
    let date = absolute_date.or(relative_date);
    let due_date = match (date, time_of_day) {
        (Some(date), Some(time)) => {
            Some(calendar::set_time_of_day(date, time.hour, time.minute).unwrap_or(date))
        }
        (Some(date), None) => Some(date),
        (None, Some(time)) => {
            trace!(?time, "time of day without a date, dropped");
            None
        }
        (None, None) => None,
    };

    let title = residual.trim();
    ParsedTask {
        title: if title.is_empty() {
            UNTITLED_TASK.to_string()
        } else {
            title.to_string()
        },
        due_date: due_date.map(|local| calendar::to_instant(local, &tz)),
        priority: priority.unwrap_or_default(),
        tags,
    }
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// First `!high|!medium|!low` sets the priority; every marker is stripped.
fn take_priority(residual: &str) -> (Option<Priority>, String) {
    let Some(caps) = PRIORITY_RE.captures(residual) else {
        return (None, residual.to_string());
    };
    let priority = caps[1].parse::<Priority>().ok();
    trace!(?priority, "priority marker");
    let stripped = PRIORITY_RE.replace_all(residual, "");
    (priority, stripped.trim().to_string())
}

fn take_tags(residual: &str) -> (Vec<String>, String) {
    let tags: Vec<String> = TAG_RE
        .captures_iter(residual)
        .map(|caps| caps[1].to_string())
        .collect();
    if tags.is_empty() {
        return (tags, residual.to_string());
    }
    trace!(?tags, "tag markers");
    let stripped = TAG_RE.replace_all(residual, "");
    (tags, stripped.trim().to_string())
}

fn take_time_of_day(residual: &str) -> (Option<TimeOfDay>, String) {
    let Some(caps) = TIME_RE.captures(residual) else {
        return (None, residual.to_string());
    };
    let Some(whole) = caps.get(0) else {
        return (None, residual.to_string());
    };
    let Ok(hour) = caps[1].parse::<u32>() else {
        return (None, residual.to_string());
    };
    let minute = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);
    let time = TimeOfDay::from_clock(hour, minute, caps.get(3).map(|m| m.as_str()));
    trace!(?time, matched = whole.as_str(), "time of day");
    (Some(time), remove_span(residual, whole.start(), whole.end()))
}

fn take_relative_date(residual: &str, now: NaiveDateTime) -> (Option<NaiveDateTime>, String) {
    let lower = residual.to_ascii_lowercase();
    for &(keyword, resolve) in DATE_KEYWORDS {
        if lower.contains(keyword) {
            let date = resolve(now);
            trace!(keyword, ?date, "relative date keyword");
            return (date, remove_all_ascii_ci(residual, keyword));
        }
    }
    (None, residual.to_string())
}

fn take_absolute_date(residual: &str) -> (Option<NaiveDateTime>, String) {
    for format in &DATE_FORMATS {
        let Some(caps) = format.pattern.captures(residual) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        match (format.build)(&caps) {
            Some(date) => {
                trace!(format = format.name, %date, "absolute date");
                return (Some(date), remove_span(residual, whole.start(), whole.end()));
            }
            None => {
                trace!(
                    format = format.name,
                    matched = whole.as_str(),
                    "not a calendar date, ignored"
                );
            }
        }
    }
    (None, residual.to_string())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn remove_span(s: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(s.len() - (end - start));
    out.push_str(&s[..start]);
    out.push_str(&s[end..]);
    out.trim().to_string()
}

/// Remove every ASCII case-insensitive occurrence of `needle` (which must be
/// lowercase ASCII). ASCII lowercasing keeps byte offsets, so positions found
/// in the lowered copy are valid in the original.
fn remove_all_ascii_ci(s: &str, needle: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for (start, _) in lower.match_indices(needle) {
        out.push_str(&s[last..start]);
        last = start + needle.len();
    }
    out.push_str(&s[last..]);
    out.trim().to_string()
}
