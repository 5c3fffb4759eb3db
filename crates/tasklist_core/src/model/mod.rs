//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the task record, its identifier, and the display filter.
//! - Keep record invariants next to the data they protect.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Task text is stored trimmed and non-empty.

pub mod filter;
pub mod task;
