use chrono::{DateTime, TimeZone};
use indexmap::IndexSet;

use crate::model::draft::{ParsedTask, TaskDraft};
use crate::parse::extract;

/// Re-parse the quick-add field and fold the result into the form.
///
/// Blank input leaves the draft alone. Returns the parsed task when the draft
/// was updated.
pub fn apply_quick_add<Tz: TimeZone>(
    draft: &mut TaskDraft,
    input: &str,
    now: DateTime<Tz>,
) -> Option<ParsedTask> {
    if input.trim().is_empty() {
        return None;
    }
    let tz = now.timezone();
    let parsed = extract(input, now);
    merge_parsed(draft, &parsed, &tz);
    Some(parsed)
}

/// Title and priority overwrite; the due date overwrites only when one was
/// parsed; tags are unioned onto the existing ones. The form's date is the
/// due instant's calendar day in `tz`.
pub fn merge_parsed<Tz: TimeZone>(draft: &mut TaskDraft, parsed: &ParsedTask, tz: &Tz) {
    draft.title = parsed.title.clone();
    draft.priority = parsed.priority;
    if let Some(due) = parsed.due_date {
        draft.due_date = Some(due.with_timezone(tz).date_naive());
    }
    draft.tags = union_tags(&draft.tags, &parsed.tags);
}

fn union_tags(existing: &[String], added: &[String]) -> Vec<String> {
    let merged: IndexSet<&String> = existing.iter().chain(added).collect();
    merged.into_iter().cloned().collect()
}
