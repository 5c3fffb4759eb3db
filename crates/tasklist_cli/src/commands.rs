//! Forwards one parsed command to a hydrated store and renders the result.
//!
//! Interaction policy of the front end lives here: only active tasks are
//! editable, so `edit` on a completed task is refused before it reaches the
//! store.

use crate::cli::Command;
use crate::render;
use chrono::TimeZone;
use std::fmt::Display;
use tasklist_core::{
    logging_status, AddOutcome, MutationOutcome, StorageSlot, TaskId, TaskListStore,
};

/// Runs `command` against `store` and returns the text to print.
pub fn execute<S, Tz>(store: &mut TaskListStore<S>, command: Command, tz: &Tz) -> String
where
    S: StorageSlot,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match command {
        Command::Add { text } => match store.add(&text.join(" ")) {
            AddOutcome::Added(id) => format!("added {id}"),
            AddOutcome::Ignored(reason) => render::ignored("add", reason),
        },
        Command::Toggle { id } => {
            let id = TaskId::new(id);
            let outcome = store.toggle(&id);
            report("toggle", outcome, || match store.get(&id) {
                Some(task) if task.completed => format!("completed {id}"),
                _ => format!("reopened {id}"),
            })
        }
        Command::Edit { id, text } => {
            let id = TaskId::new(id);
            if store.get(&id).is_some_and(|task| task.completed) {
                return render::edit_refused_completed();
            }
            let outcome = store.edit(&id, &text.join(" "));
            report("edit", outcome, || format!("edited {id}"))
        }
        Command::Delete { id } => {
            let id = TaskId::new(id);
            let outcome = store.delete(&id);
            report("delete", outcome, || format!("deleted {id}"))
        }
        Command::ClearCompleted => {
            let before = store.counts().completed;
            let outcome = store.clear_completed();
            report("clear-completed", outcome, || format!("cleared {before}"))
        }
        Command::List { filter } => {
            store.set_filter(filter);
            render::listing(&store.visible(), store.filter(), store.counts(), tz)
        }
        Command::Version => render::version(tasklist_core::core_version(), logging_status()),
    }
}

fn report(action: &str, outcome: MutationOutcome, applied: impl FnOnce() -> String) -> String {
    match outcome {
        MutationOutcome::Applied => applied(),
        MutationOutcome::Ignored(reason) => render::ignored(action, reason),
    }
}
