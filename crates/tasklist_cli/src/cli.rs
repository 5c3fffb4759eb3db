//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_core::Filter;

/// Top-level CLI parser for `tasklist`.
#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about = "Keep a local task list")]
pub struct Cli {
    /// SQLite file holding the storage slots.
    #[arg(long, env = "TASKLIST_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Storage slot key the list is saved under.
    #[arg(long, default_value = tasklist_core::DEFAULT_SLOT_KEY, global = true)]
    pub key: String,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "TASKLIST_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, env = "TASKLIST_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task to the top of the list.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Flip a task between active and completed.
    Toggle { id: String },
    /// Replace the text of a task.
    Edit {
        id: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a task.
    Delete { id: String },
    /// Delete every completed task.
    ClearCompleted,
    /// Show counts and tasks.
    List {
        #[arg(long, short, default_value = "all", value_parser = parse_filter)]
        filter: Filter,
    },
    /// Print the core library version.
    Version,
}

fn parse_filter(value: &str) -> Result<Filter, String> {
    value.parse::<Filter>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use tasklist_core::Filter;

    #[test]
    fn parses_add_with_multiple_words() {
        let cli = Cli::parse_from(["tasklist", "add", "buy", "milk"]);
        match cli.command {
            Command::Add { text } => assert_eq!(text.join(" "), "buy milk"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.key, "todos");
    }

    #[test]
    fn parses_list_filter_case_insensitively() {
        let cli = Cli::parse_from(["tasklist", "list", "--filter", "Completed"]);
        assert!(matches!(
            cli.command,
            Command::List {
                filter: Filter::Completed
            }
        ));
    }

    #[test]
    fn list_filter_defaults_to_all() {
        let cli = Cli::parse_from(["tasklist", "list"]);
        assert!(matches!(cli.command, Command::List { filter: Filter::All }));
    }

    #[test]
    fn rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["tasklist", "list", "--filter", "done"]).is_err());
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["tasklist", "add"]).is_err());
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::parse_from(["tasklist", "clear-completed", "--key", "work", "--db", "/tmp/t.db"]);
        assert!(matches!(cli.command, Command::ClearCompleted));
        assert_eq!(cli.key, "work");
        assert_eq!(cli.db.unwrap().to_str(), Some("/tmp/t.db"));
    }
}
