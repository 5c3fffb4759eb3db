//! Task list store.
//!
//! # Responsibility
//! - Own the authoritative task list and the current filter selection.
//! - Be the only writer of the persisted storage slot.
//!
//! # Invariants
//! - Task ids are unique across the list at all times.
//! - New tasks are prepended; other mutations keep every untouched task in
//!   its position.
//! - Every state-changing mutation is followed by a synchronous `save()`.
//!   A failed save is logged and recorded but never rolls back memory.
//! - No operation fails on unknown ids or empty input.

use crate::codec::{decode_tasks, encode_tasks};
use crate::model::filter::{Filter, TaskCounts};
use crate::model::task::{Task, TaskId};
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::id_gen::{IdGenerator, UuidIdGenerator};
use crate::storage::{StorageError, StorageResult, StorageSlot};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Fresh ids drawn per `add` before giving up on collisions.
const MAX_ID_DRAWS: usize = 8;

/// Why a mutation left the list untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyText,
    UnchangedText,
    UnknownId,
    NothingToClear,
    /// The id generator kept returning ids already in the list.
    IdCollision,
}

impl Display for IgnoreReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::EmptyText => "text is empty",
            Self::UnchangedText => "text is unchanged",
            Self::UnknownId => "no task with that id",
            Self::NothingToClear => "no completed tasks",
            Self::IdCollision => "no unused task id available",
        };
        f.write_str(message)
    }
}

/// Result of a toggle/edit/delete/clear mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MutationOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    Added(TaskId),
    Ignored(IgnoreReason),
}

impl AddOutcome {
    /// Returns the new task id when a task was created.
    pub fn id(&self) -> Option<&TaskId> {
        match self {
            Self::Added(id) => Some(id),
            Self::Ignored(_) => None,
        }
    }
}

/// Explicitly owned task list bound to one storage slot.
pub struct TaskListStore<S: StorageSlot> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
    filter: Filter,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    last_save_error: Option<StorageError>,
}

impl<S: StorageSlot> TaskListStore<S> {
    /// Hydrates a store from `key` using the system clock and UUID ids.
    ///
    /// Never fails: an unreadable or malformed slot yields an empty list.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        Self::load_with(
            storage,
            key,
            Box::new(SystemClock),
            Box::new(UuidIdGenerator),
        )
    }

    /// Same as [`TaskListStore::load`] with injected time and id sources.
    pub fn load_with(
        storage: S,
        key: impl Into<String>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let key = key.into();
        let tasks = hydrate(&storage, &key);
        Self {
            storage,
            key,
            tasks,
            filter: Filter::default(),
            clock,
            ids,
            last_save_error: None,
        }
    }

    /// Full ordered snapshot, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks matching `filter`, in list order.
    pub fn filtered_view(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    /// Tasks matching the stored filter selection.
    pub fn visible(&self) -> Vec<&Task> {
        self.filtered_view(self.filter)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    /// Error from the most recent save, cleared by the next successful one.
    pub fn last_save_error(&self) -> Option<&StorageError> {
        self.last_save_error.as_ref()
    }

    /// Creates a task from `text` and prepends it.
    pub fn add(&mut self, text: &str) -> AddOutcome {
        if text.trim().is_empty() {
            return AddOutcome::Ignored(IgnoreReason::EmptyText);
        }
        let Some(id) = (0..MAX_ID_DRAWS)
            .map(|_| self.ids.next_id())
            .find(|id| self.get(id).is_none())
        else {
            warn!(
                "event=task_add module=store status=error reason=id_collision draws={MAX_ID_DRAWS}"
            );
            return AddOutcome::Ignored(IgnoreReason::IdCollision);
        };
        let Some(task) = Task::new(id.clone(), text, self.clock.now()) else {
            return AddOutcome::Ignored(IgnoreReason::EmptyText);
        };

        self.tasks.insert(0, task);
        debug!("event=task_add module=store status=ok total={}", self.tasks.len());
        self.persist();
        AddOutcome::Added(id)
    }

    /// Flips `completed` on the matching task.
    pub fn toggle(&mut self, id: &TaskId) -> MutationOutcome {
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            return MutationOutcome::Ignored(IgnoreReason::UnknownId);
        };

        task.completed = !task.completed;
        debug!(
            "event=task_toggle module=store status=ok completed={}",
            task.completed
        );
        self.persist();
        MutationOutcome::Applied
    }

    /// Replaces the text of the matching task.
    ///
    /// Empty (after trim) or unchanged text is treated as a cancelled edit.
    pub fn edit(&mut self, id: &TaskId, new_text: &str) -> MutationOutcome {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return MutationOutcome::Ignored(IgnoreReason::EmptyText);
        }
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            return MutationOutcome::Ignored(IgnoreReason::UnknownId);
        };
        if task.text == new_text {
            return MutationOutcome::Ignored(IgnoreReason::UnchangedText);
        }

        task.text = new_text.to_string();
        debug!("event=task_edit module=store status=ok");
        self.persist();
        MutationOutcome::Applied
    }

    /// Removes the matching task.
    pub fn delete(&mut self, id: &TaskId) -> MutationOutcome {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        if self.tasks.len() == before {
            return MutationOutcome::Ignored(IgnoreReason::UnknownId);
        }

        debug!(
            "event=task_delete module=store status=ok total={}",
            self.tasks.len()
        );
        self.persist();
        MutationOutcome::Applied
    }

    /// Removes every completed task, keeping the rest in order.
    pub fn clear_completed(&mut self) -> MutationOutcome {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return MutationOutcome::Ignored(IgnoreReason::NothingToClear);
        }

        debug!("event=task_clear_completed module=store status=ok removed={removed}");
        self.persist();
        MutationOutcome::Applied
    }

    /// Writes the whole list to the storage slot.
    ///
    /// # Errors
    /// - Returns `StorageError` when encoding or the backend write fails.
    pub fn save(&mut self) -> StorageResult<()> {
        let encoded = encode_tasks(&self.tasks)
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        self.storage.write(&self.key, &encoded)
    }

    fn persist(&mut self) {
        match self.save() {
            Ok(()) => self.last_save_error = None,
            Err(err) => {
                warn!(
                    "event=slot_save module=store status=error key={} total={} error={}",
                    self.key,
                    self.tasks.len(),
                    err
                );
                self.last_save_error = Some(err);
            }
        }
    }
}

fn hydrate<S: StorageSlot>(storage: &S, key: &str) -> Vec<Task> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=slot_load module=store status=empty key={key}");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=slot_load module=store status=error error_code=slot_read_failed key={key} error={err}"
            );
            return Vec::new();
        }
    };

    let decoded = match decode_tasks(&raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=slot_load module=store status=error error_code=slot_decode_failed key={key} error={err}"
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(decoded.len());
    for task in decoded {
        if seen.insert(task.id.clone()) {
            tasks.push(task);
        } else {
            warn!("event=slot_load module=store status=warn reason=duplicate_id id={}", task.id);
        }
    }

    info!(
        "event=slot_load module=store status=ok key={} total={}",
        key,
        tasks.len()
    );
    tasks
}
