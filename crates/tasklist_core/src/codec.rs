//! Slot codec for the persisted task list.
//!
//! # Responsibility
//! - Encode the whole task list into the single storage slot value.
//! - Decode a slot value back into validated tasks.
//!
//! # Invariants
//! - Timestamps are written as RFC 3339 UTC with millisecond precision.
//! - Decoding is all-or-nothing: one malformed record rejects the slot.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while encoding or decoding a slot value.
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed task list: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes tasks in list order.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parses a slot value into tasks, preserving order.
///
/// # Errors
/// - Returns `CodecError::Json` for malformed JSON, missing fields,
///   unparsable timestamps, or records failing `Task::validate()`.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, CodecError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serde adapter for `createdAt` values.
pub(crate) mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|value| value.with_timezone(&Utc))
            .map_err(|err| serde::de::Error::custom(format!("invalid createdAt `{raw}`: {err}")))
    }
}
