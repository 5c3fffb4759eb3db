//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by the store and the slot codec.
//! - Enforce record-level invariants on every construction path, including
//!   deserialization.
//!
//! # Invariants
//! - `id` is non-empty and never reassigned after creation.
//! - `text` is non-empty and already trimmed.
//! - `created_at` carries millisecond precision so it round-trips exactly
//!   through the persisted textual form.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Stored as a string so ids written by older builds (decimal millisecond
/// strings) still load next to the UUID-based ids produced today.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier string without validation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyText,
    UntrimmedText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::UntrimmedText => {
                write!(f, "task text must not have leading or trailing whitespace")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an open task from raw user input.
    ///
    /// Returns `None` when `text` is empty after trimming.
    pub fn new(id: TaskId, text: &str, created_at: DateTime<Utc>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            created_at: created_at.trunc_subsecs(3),
        })
    }

    /// Checks record invariants.
    ///
    /// # Errors
    /// - `EmptyId` when the id is blank.
    /// - `EmptyText` / `UntrimmedText` when the text is not in canonical form.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.text.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        if self.text.trim() != self.text {
            return Err(TaskValidationError::UntrimmedText);
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Persisted shape of a task.
///
/// Field names follow the slot layout (`createdAt` in camel case).
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    text: String,
    completed: bool,
    #[serde(with = "crate::codec::timestamp")]
    created_at: DateTime<Utc>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: record.id,
            text: record.text,
            completed: record.completed,
            created_at: record.created_at.trunc_subsecs(3),
        };
        task.validate()?;
        Ok(task)
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}
