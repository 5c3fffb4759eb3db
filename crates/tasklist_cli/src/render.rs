//! Plain-text rendering of store snapshots.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use std::path::PathBuf;
use tasklist_core::{Filter, IgnoreReason, Task, TaskCounts};

pub fn counts_line(counts: TaskCounts) -> String {
    format!(
        "Total: {}  Active: {}  Complete: {}",
        counts.total, counts.active, counts.completed
    )
}

/// Message shown when `filter` selects nothing.
pub fn empty_state(filter: Filter, total: usize) -> &'static str {
    match filter {
        Filter::Completed if total > 0 => "No completed tasks yet",
        Filter::Active if total > 0 => "No active tasks - great job!",
        _ => "No tasks yet. Add one to get started!",
    }
}

pub fn created_at<Tz>(value: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value
        .with_timezone(tz)
        .format("%Y-%m-%d at %H:%M")
        .to_string()
}

pub fn task_line<Tz>(task: &Task, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mark = if task.completed { 'x' } else { ' ' };
    format!(
        "[{mark}] {}  ({}, {})",
        task.text,
        task.id,
        created_at(&task.created_at, tz)
    )
}

/// Full `list` output.
pub fn listing<Tz>(tasks: &[&Task], filter: Filter, counts: TaskCounts, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = vec![counts_line(counts)];
    if tasks.is_empty() {
        lines.push(empty_state(filter, counts.total).to_string());
    } else {
        lines.extend(tasks.iter().map(|task| task_line(task, tz)));
    }
    if counts.completed > 0 {
        lines.push(format!(
            "{} completed; run `clear-completed` to remove them",
            counts.completed
        ));
    }
    lines.join("\n")
}

pub fn ignored(action: &str, reason: IgnoreReason) -> String {
    format!("{action}: nothing changed ({reason})")
}

/// Refusal for editing a completed task; only active tasks are editable.
pub fn edit_refused_completed() -> String {
    "edit: nothing changed (task is completed; toggle it back to edit)".to_string()
}

/// `version` output: core version plus the active logging setup.
pub fn version(core_version: &str, logging: Option<(&str, PathBuf)>) -> String {
    let logging = match logging {
        Some((level, dir)) => format!("logging: level={level} dir={}", dir.display()),
        None => "logging: off".to_string(),
    };
    format!("tasklist_core {core_version}\n{logging}")
}
