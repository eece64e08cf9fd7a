use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::Serialize;

use crate::model::config::SuggestConfig;
use crate::model::task::{Priority, Task};

/// Existing titles that contain `input` (case-insensitive), for the quick-add
/// autocomplete. Distinct, in first-seen order, at most `config.limit`.
pub fn title_suggestions(input: &str, tasks: &[Task], config: &SuggestConfig) -> Vec<String> {
    if input.chars().count() < config.min_input_len {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    let mut seen: IndexSet<&str> = IndexSet::new();
    for task in tasks {
        if seen.len() == config.limit {
            break;
        }
        if task.title.to_lowercase().contains(&needle) {
            seen.insert(task.title.as_str());
        }
    }
    seen.into_iter().map(str::to_string).collect()
}

/// Kind of summary reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NudgeKind {
    Overdue,
    HighPriority,
}

/// A reminder about a group of tasks
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nudge {
    #[serde(rename = "type")]
    pub kind: NudgeKind,
    pub message: String,
    /// Ids of the tasks the nudge is about
    pub task_ids: Vec<String>,
}

/// Overdue and pending high-priority reminders, in that order. A nudge is
/// only produced when it covers at least one task.
pub fn task_nudges(tasks: &[Task], now: DateTime<Utc>) -> Vec<Nudge> {
    let mut nudges = Vec::new();

    let overdue: Vec<String> = tasks
        .iter()
        .filter(|t| !t.is_done() && t.due_date.is_some_and(|due| due < now))
        .map(|t| t.id.clone())
        .collect();
    if !overdue.is_empty() {
        nudges.push(Nudge {
            kind: NudgeKind::Overdue,
            message: format!("You have {} overdue task(s)", overdue.len()),
            task_ids: overdue,
        });
    }

    let high: Vec<String> = tasks
        .iter()
        .filter(|t| !t.is_done() && t.priority == Priority::High)
        .map(|t| t.id.clone())
        .collect();
    if !high.is_empty() {
        nudges.push(Nudge {
            kind: NudgeKind::HighPriority,
            message: format!("{} high priority task(s) pending", high.len()),
            task_ids: high,
        });
    }

    nudges
}
