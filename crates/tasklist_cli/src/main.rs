//! `tasklist` command-line front end.
//!
//! # Responsibility
//! - Open the storage slot, hydrate the store once, forward one intent.
//! - Render the resulting snapshot; no business rules live here.

mod cli;
mod commands;
mod render;

use chrono::Local;
use clap::Parser;
use cli::{Cli, Command};
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;
use tasklist_core::db::open_db;
use tasklist_core::{
    default_log_level, init_logging, logging_status, SqliteStorage, TaskListStore,
};

const DB_DIR_NAME: &str = "tasklist";
const DB_FILE_NAME: &str = "tasklist.sqlite3";

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tasklist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        // Logging is diagnostics only; a bad config must not block the list.
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("tasklist: logging disabled: {err}");
        }
    }

    if matches!(cli.command, Command::Version) {
        println!(
            "{}",
            render::version(tasklist_core::core_version(), logging_status())
        );
        return Ok(());
    }

    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    let conn = open_db(&db_path)
        .map_err(|err| format!("cannot open `{}`: {err}", db_path.display()))?;
    let mut store = TaskListStore::load(SqliteStorage::new(conn), cli.key);

    println!("{}", commands::execute(&mut store, cli.command, &Local));

    if let Some(err) = store.last_save_error() {
        warn!("event=cli_save module=cli status=error error={err}");
        eprintln!("tasklist: changes kept for this run only: {err}");
    }
    Ok(())
}

fn default_db_path() -> Result<PathBuf, String> {
    dirs::data_local_dir()
        .map(|dir| dir.join(DB_DIR_NAME).join(DB_FILE_NAME))
        .ok_or_else(|| "no local data directory; pass --db or set TASKLIST_DB".to_string())
}
