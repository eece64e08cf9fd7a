use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::task::{Priority, TaskStatus};
use crate::parse::calendar;

/// Title used when nothing but markers was typed
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Structured fields extracted from a quick-add phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    pub title: String,
    /// Serialized as a millisecond `Z` instant, the same form `Task.dueDate` reads
    #[serde(with = "due_date_format")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub tags: Vec<String>,
}

impl Default for ParsedTask {
    fn default() -> Self {
        ParsedTask {
            title: UNTITLED_TASK.to_string(),
            due_date: None,
            priority: Priority::Medium,
            tags: Vec::new(),
        }
    }
}

impl ParsedTask {
    /// `dueDate` as an ISO-8601 UTC instant
    pub fn due_date_iso(&self) -> Option<String> {
        self.due_date.map(calendar::to_iso_instant)
    }
}

mod due_date_format {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::parse::calendar;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => serializer.serialize_str(&calendar::to_iso_instant(*instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<DateTime<Utc>>::deserialize(deserializer)
    }
}

/// Editable state of the task creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// The form's date input holds a calendar date only
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub tags: Vec<String>,
}
