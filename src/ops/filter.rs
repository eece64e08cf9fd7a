use crate::model::task::{Priority, Task, TaskStatus};

/// Criteria for the task list. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring of the title or description
    pub search: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    /// A task matches if it carries any one of these
    pub tags: Vec<String>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.priority.is_none()
            && self.status.is_none()
            && self.tags.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                task.title.to_lowercase().contains(&query)
                    || task.description.to_lowercase().contains(&query)
            }
            _ => true,
        };
        let matches_priority = self.priority.is_none_or(|p| p == task.priority);
        let matches_status = self.status.is_none_or(|s| s == task.status);
        let matches_tags =
            self.tags.is_empty() || self.tags.iter().any(|tag| task.tags.contains(tag));

        matches_search && matches_priority && matches_status && matches_tags
    }
}

/// Tasks passing `filter`, in their original order
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}
