//! Injectable sources of time and identity.
//!
//! # Responsibility
//! - Keep the store deterministic under test by abstracting `now()` and
//!   id generation behind small traits.

pub mod clock;
pub mod id_gen;
