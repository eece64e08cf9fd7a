use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ff", about = concat!("focusflow v", env!("CARGO_PKG_VERSION"), " - quick add for tasks"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this file instead of the default config location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a quick-add phrase into task fields
    Parse(ParseArgs),
    /// Suggest existing task titles matching a prefix
    Suggest(SuggestArgs),
    /// Show overdue and high-priority reminders
    Nudges(NudgesArgs),
    /// List tasks, optionally filtered
    List(ListArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Phrase to parse, e.g. "Submit report tomorrow at 5pm !high @work"
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Reference time (YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD; default: now)
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Text typed so far
    pub prefix: String,
    /// Task list exported as JSON
    #[arg(long)]
    pub tasks: PathBuf,
}

#[derive(Args)]
pub struct NudgesArgs {
    /// Task list exported as JSON
    #[arg(long)]
    pub tasks: PathBuf,
    /// Reference time (YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD; default: now)
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Task list exported as JSON
    #[arg(long)]
    pub tasks: PathBuf,
    /// Case-insensitive text to find in title or description
    #[arg(long)]
    pub search: Option<String>,
    /// Filter by priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
    /// Filter by status (backlog, todo, in-progress, done)
    #[arg(long)]
    pub status: Option<String>,
    /// Filter by tag (repeatable; matches any)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}
