//! Core use-case services.
//!
//! # Responsibility
//! - Expose the task list operations forwarded by presentation layers.
//! - Keep presentation decoupled from storage and codec details.

pub mod task_list_store;
