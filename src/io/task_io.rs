use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::task::Task;

/// Error type for reading exported task lists
#[derive(Debug, thiserror::Error)]
pub enum TaskIoError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse tasks in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parse a JSON array of task records
pub fn parse_tasks_json(text: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Load a task list exported as JSON
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, TaskIoError> {
    let text = fs::read_to_string(path).map_err(|e| TaskIoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let tasks = parse_tasks_json(&text).map_err(|e| TaskIoError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}
