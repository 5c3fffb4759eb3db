//! Id generator port for new tasks.
//!
//! Only uniqueness within a running session is required; ids are neither
//! sortable nor meaningful.

use crate::model::task::TaskId;
use std::cell::Cell;

/// Produces fresh task identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> TaskId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId::random()
    }
}

/// Deterministic `task-1`, `task-2`, ... identifiers.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> TaskId {
        let value = self.next.get() + 1;
        self.next.set(value);
        TaskId::new(format!("task-{value}"))
    }
}
