use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::model::draft::ParsedTask;
use crate::model::task::{Task, TaskStatus};
use crate::ops::suggest::Nudge;
use crate::parse::calendar;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTaskJson {
    pub title: String,
    /// UTC instant, readable as a task record's `dueDate`
    pub due_date: Option<String>,
    /// The same due time on the local wall clock
    pub due_local: Option<String>,
    pub priority: String,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummaryJson {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Format an instant the way exported task lists store it
pub fn instant_string(instant: DateTime<Utc>) -> String {
    calendar::to_iso_instant(instant)
}

/// Wall-clock `YYYY-MM-DDTHH:MM:SS` of an instant in `tz`
pub fn local_string<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant
        .with_timezone(tz)
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

pub fn parsed_to_json<Tz: TimeZone>(parsed: &ParsedTask, tz: &Tz) -> ParsedTaskJson {
    ParsedTaskJson {
        title: parsed.title.clone(),
        due_date: parsed.due_date_iso(),
        due_local: parsed.due_date.map(|due| local_string(due, tz)),
        priority: parsed.priority.to_string(),
        tags: parsed.tags.clone(),
    }
}

pub fn task_to_json(task: &Task) -> TaskSummaryJson {
    TaskSummaryJson {
        id: task.id.clone(),
        title: task.title.clone(),
        status: task.status,
        priority: task.priority.to_string(),
        tags: task.tags.clone(),
        due_date: task.due_date.map(instant_string),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Multi-line human-readable view of a parsed phrase, with the due time on
/// the wall clock of `tz`
pub fn format_parsed<Tz: TimeZone>(parsed: &ParsedTask, tz: &Tz) -> Vec<String> {
    let mut lines = vec![
        format!("title:    {}", parsed.title),
        format!("priority: {}", parsed.priority),
    ];
    match parsed.due_date.map(|due| local_string(due, tz)) {
        Some(due) => lines.push(format!("due:      {}", due)),
        None => lines.push("due:      -".to_string()),
    }
    if !parsed.tags.is_empty() {
        lines.push(format!(
            "tags:     {}",
            parsed
                .tags
                .iter()
                .map(|t| format!("@{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        ));
    }
    lines
}

fn status_char(status: TaskStatus) -> char {
    match status {
        TaskStatus::Backlog => '.',
        TaskStatus::Todo => ' ',
        TaskStatus::InProgress => '>',
        TaskStatus::Done => 'x',
    }
}

/// Format a task as a one-line summary: `[>] Title @tag (high, due 2024-01-02)`
pub fn format_task_line(task: &Task) -> String {
    let tags_str = if task.tags.is_empty() {
        String::new()
    } else {
        format!(
            " {}",
            task.tags
                .iter()
                .map(|t| format!("@{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        )
    };
    let due_str = task
        .due_date
        .map(|d| format!(", due {}", d.format("%Y-%m-%d")))
        .unwrap_or_default();
    format!(
        "[{}] {}{} ({}{})",
        status_char(task.status),
        task.title,
        tags_str,
        task.priority,
        due_str
    )
}

pub fn format_nudge(nudge: &Nudge) -> String {
    format!("! {}", nudge.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use chrono::FixedOffset;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_parsed() {
        let parsed = ParsedTask {
            title: "Submit report".into(),
            due_date: Some(Utc.with_ymd_and_hms(2024, 1, 2, 17, 0, 0).unwrap()),
            priority: Priority::High,
            tags: vec!["work".into(), "q1".into()],
        };
        assert_snapshot!(format_parsed(&parsed, &Utc).join("\n"), @r"
        title:    Submit report
        priority: high
        due:      2024-01-02T17:00:00
        tags:     @work @q1
        ");
    }

    #[test]
    fn test_format_parsed_defaults() {
        assert_snapshot!(format_parsed(&ParsedTask::default(), &Utc).join("\n"), @r"
        title:    Untitled Task
        priority: medium
        due:      -
        ");
    }

    #[test]
    fn test_format_task_line() {
        let mut task = Task::new("1", "Write report");
        task.status = TaskStatus::InProgress;
        task.priority = Priority::High;
        task.tags = vec!["work".into()];
        task.due_date = Some(Utc.with_ymd_and_hms(2024, 1, 2, 17, 0, 0).unwrap());
        assert_eq!(
            format_task_line(&task),
            "[>] Write report @work (high, due 2024-01-02)"
        );
        assert_eq!(format_task_line(&Task::new("2", "Plain")), "[ ] Plain (medium)");
    }

    #[test]
    fn test_instant_string_matches_export_format() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 17, 0, 0).unwrap();
        assert_eq!(instant_string(instant), "2024-01-02T17:00:00.000Z");
    }

    #[test]
    fn test_parsed_json_due_is_instant_with_local_companion() {
        let parsed = ParsedTask {
            title: "Submit report".into(),
            due_date: Some(Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap()),
            ..ParsedTask::default()
        };
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let json = serde_json::to_value(parsed_to_json(&parsed, &tz)).unwrap();
        assert_eq!(json["dueDate"], "2024-01-02T15:00:00.000Z");
        assert_eq!(json["dueLocal"], "2024-01-02T17:00:00");
        assert!(json.get("dueInstant").is_none());

        let readback: DateTime<Utc> = json["dueDate"].as_str().unwrap().parse().unwrap();
        assert_eq!(Some(readback), parsed.due_date);
    }
}
