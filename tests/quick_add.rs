//! Behavior of the public quick-add parser on whole phrases.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use focusflow::model::{ParsedTask, Priority};
use focusflow::parse::extract;
use pretty_assertions::assert_eq;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn jan1() -> DateTime<Utc> {
    at(2024, 1, 1, 0, 0)
}

#[test]
fn empty_input_is_all_defaults() {
    let parsed = extract("", jan1());
    assert_eq!(parsed, ParsedTask::default());
    assert_eq!(parsed.title, "Untitled Task");
    assert_eq!(parsed.priority, Priority::Medium);
    assert!(parsed.tags.is_empty());
    assert_eq!(parsed.due_date, None);
}

#[test]
fn markers_only_gives_placeholder_title() {
    let parsed = extract("  !low @home tomorrow ", jan1());
    assert_eq!(parsed.title, "Untitled Task");
    assert_eq!(parsed.priority, Priority::Low);
    assert_eq!(parsed.tags, vec!["home"]);
}

#[test]
fn plain_text_passes_through() {
    let parsed = extract("  Water the plants  ", jan1());
    assert_eq!(
        parsed,
        ParsedTask {
            title: "Water the plants".into(),
            ..ParsedTask::default()
        }
    );
}

#[test]
fn priority_extraction() {
    let parsed = extract("Buy milk !high", jan1());
    assert_eq!(parsed.priority, Priority::High);
    assert_eq!(parsed.title, "Buy milk");
}

#[test]
fn first_priority_wins() {
    let parsed = extract("Task !high !low", jan1());
    assert_eq!(parsed.priority, Priority::High);
    assert_eq!(parsed.title, "Task");
}

#[test]
fn tags_keep_multiplicity_and_order() {
    let parsed = extract("Plan @work @urgent @work", jan1());
    assert_eq!(parsed.tags, vec!["work", "urgent", "work"]);
    assert_eq!(parsed.title, "Plan");
}

#[test]
fn keyword_table_order_decides() {
    // "tomorrow" is checked before "next week"
    let parsed = extract("Do it tomorrow next week", jan1());
    assert_eq!(parsed.due_date, Some(at(2024, 1, 2, 0, 0)));
    assert_eq!(parsed.title, "Do it  next week");
}

#[test]
fn time_without_date_is_dropped() {
    let parsed = extract("Call at 5pm", jan1());
    assert_eq!(parsed.due_date, None);
    assert_eq!(parsed.title, "Call");
}

#[test]
fn time_combines_with_relative_date() {
    let parsed = extract("Submit tomorrow at 5pm", jan1());
    assert_eq!(parsed.due_date, Some(at(2024, 1, 2, 17, 0)));
    assert_eq!(parsed.due_date_iso().as_deref(), Some("2024-01-02T17:00:00.000Z"));
}

#[test]
fn absolute_date_overwrites_relative_keyword() {
    // Both are present; the absolute date is applied later and wins
    let parsed = extract("Meeting tomorrow 2024-03-15", jan1());
    assert_eq!(parsed.due_date.map(|d| d.date_naive()), NaiveDate::from_ymd_opt(2024, 3, 15));
    assert_eq!(parsed.title, "Meeting");
}

#[test]
fn meridiem_conversion() {
    let hour = |phrase: &str| {
        extract(&format!("x today {}", phrase), jan1())
            .due_date
            .map(|d| d.format("%H:%M").to_string())
    };
    assert_eq!(hour("at 12am").as_deref(), Some("00:00"));
    assert_eq!(hour("at 12pm").as_deref(), Some("12:00"));
    assert_eq!(hour("at 7am").as_deref(), Some("07:00"));
    assert_eq!(hour("at 7pm").as_deref(), Some("19:00"));
    assert_eq!(hour("at 7PM").as_deref(), Some("19:00"));
}

#[test]
fn full_phrase() {
    let parsed = extract("Submit report tomorrow at 5pm !high @work", jan1());
    assert_eq!(
        parsed,
        ParsedTask {
            title: "Submit report".into(),
            due_date: Some(at(2024, 1, 2, 17, 0)),
            priority: Priority::High,
            tags: vec!["work".into()],
        }
    );
}

#[test]
fn us_date_with_time_and_tags() {
    let parsed = extract("Dinner @family 12/24/2024 at 7:30pm", jan1());
    assert_eq!(parsed.due_date, Some(at(2024, 12, 24, 19, 30)));
    assert_eq!(parsed.tags, vec!["family"]);
    assert_eq!(parsed.title, "Dinner");
}

#[test]
fn deterministic_for_same_input() {
    let phrases = [
        "",
        "Submit report tomorrow at 5pm !high @work",
        "Meeting tomorrow 2024-03-15",
        "2/30/2024 at 99:99pm !LOW @a @b",
    ];
    for phrase in phrases {
        let first = serde_json::to_string(&extract(phrase, jan1())).unwrap();
        for _ in 0..3 {
            assert_eq!(serde_json::to_string(&extract(phrase, jan1())).unwrap(), first);
        }
    }
}

#[test]
fn serialized_due_date_is_a_utc_instant() {
    let now = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .unwrap();
    let parsed = extract("Submit report tomorrow at 5pm", now);
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["dueDate"], "2024-01-02T22:00:00.000Z");

    let readback: DateTime<Utc> = serde_json::from_value(json["dueDate"].clone()).unwrap();
    assert_eq!(Some(readback), parsed.due_date);
}
