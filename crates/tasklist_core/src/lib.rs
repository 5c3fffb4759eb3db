//! Core domain logic for the local task list.
//! This crate is the single source of truth for business invariants.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod ports;
pub mod service;
pub mod storage;

pub use codec::{decode_tasks, encode_tasks, CodecError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{Filter, ParseFilterError, TaskCounts};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use ports::clock::{Clock, FixedClock, SystemClock};
pub use ports::id_gen::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use service::task_list_store::{AddOutcome, IgnoreReason, MutationOutcome, TaskListStore};
pub use storage::{
    MemoryStorage, SqliteStorage, StorageError, StorageResult, StorageSlot, DEFAULT_SLOT_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
