use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, task_io};
use crate::model::config::Config;
use crate::model::task::{Priority, TaskStatus};
use crate::ops::filter::{TaskFilter, filter_tasks};
use crate::ops::suggest::{task_nudges, title_suggestions};
use crate::parse::{calendar, extract};

/// Error type for bad command-line values
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid --now value '{0}' (expected YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD)")]
    InvalidNow(String),
    #[error("{0}")]
    InvalidFilter(String),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(cli.config.as_deref())?;
    let json = cli.json || config.output.json;

    match cli.command {
        Commands::Parse(args) => cmd_parse(args, json),
        Commands::Suggest(args) => cmd_suggest(args, &config, json),
        Commands::Nudges(args) => cmd_nudges(args, json),
        Commands::List(args) => cmd_list(args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve `--now`, defaulting to the local clock
pub fn parse_now(value: Option<&str>) -> Result<NaiveDateTime, CliError> {
    let Some(raw) = value else {
        return Ok(Local::now().naive_local());
    };
    let raw = raw.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| CliError::InvalidNow(raw.to_string()))
}

fn build_filter(args: &ListArgs) -> Result<TaskFilter, CliError> {
    let priority = args
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()
        .map_err(CliError::InvalidFilter)?;
    let status = args
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()
        .map_err(CliError::InvalidFilter)?;
    Ok(TaskFilter {
        search: args.search.clone(),
        priority,
        status,
        tags: args.tags.clone(),
    })
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_parse(args: ParseArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = calendar::to_instant(parse_now(args.now.as_deref())?, &Local);
    let now = now.with_timezone(&Local);
    let text = args.text.join(" ");
    let parsed = extract(&text, now);
    debug!(input = %text, ?parsed, "parsed quick-add phrase");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&parsed_to_json(&parsed, &Local))?
        );
    } else {
        for line in format_parsed(&parsed, &Local) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_suggest(
    args: SuggestArgs,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = task_io::read_tasks(&args.tasks)?;
    let titles = title_suggestions(&args.prefix, &tasks, &config.suggest);

    if json {
        println!("{}", serde_json::to_string_pretty(&titles)?);
    } else {
        for title in titles {
            println!("{}", title);
        }
    }
    Ok(())
}

fn cmd_nudges(args: NudgesArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = calendar::to_instant(parse_now(args.now.as_deref())?, &Local);
    let tasks = task_io::read_tasks(&args.tasks)?;
    let nudges = task_nudges(&tasks, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&nudges)?);
    } else {
        for nudge in &nudges {
            println!("{}", format_nudge(nudge));
        }
    }
    Ok(())
}

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(&args)?;
    let tasks = task_io::read_tasks(&args.tasks)?;
    let matching = filter_tasks(&tasks, &filter);

    if json {
        let out: Vec<_> = matching.iter().map(|t| task_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for task in matching {
            println!("{}", format_task_line(task));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_now_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_now(Some("2024-01-01T09:30")).unwrap(), expected);
        assert_eq!(parse_now(Some("2024-01-01T09:30:00")).unwrap(), expected);
        assert_eq!(parse_now(Some("2024-01-01 09:30")).unwrap(), expected);
        assert_eq!(
            parse_now(Some("2024-01-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn test_parse_now_rejects_garbage() {
        let err = parse_now(Some("yesterday")).unwrap_err();
        assert!(err.to_string().contains("invalid --now value 'yesterday'"));
    }

    #[test]
    fn test_build_filter_rejects_unknown_priority() {
        let args = ListArgs {
            tasks: "tasks.json".into(),
            search: None,
            priority: Some("urgent".into()),
            status: None,
            tags: Vec::new(),
        };
        let err = build_filter(&args).unwrap_err();
        assert_eq!(err.to_string(), "unknown priority: urgent");
    }
}
