//! Configuration module for quest data structures
//!
//! This module handles deserialization of the quest table document. The
//! document is a JSON array with one object per quest record.

mod dialogue;
mod options;
mod quest;

pub use dialogue::*;
pub use options::*;
pub use quest::*;

use crate::error::{DynQuestError, Result};
use serde_json::Value;
use std::path::Path;

/// Parse a quest table document from a JSON string
pub fn parse_quests(document: &str) -> Result<Vec<QuestRecord>> {
    let value: Value = serde_json::from_str(document)
        .map_err(|e| DynQuestError::Deserialization(e.to_string()))?;
    quests_from_value(value)
}

/// Read and parse a quest table document from disk
pub fn read_quests(path: impl AsRef<Path>) -> Result<Vec<QuestRecord>> {
    let path = path.as_ref();
    let document = std::fs::read_to_string(path).map_err(|source| DynQuestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_quests(&document)
}

/// Convert an already-parsed JSON document into quest records
///
/// Records are converted one at a time so a failure names the offending
/// array index. The first malformed record fails the whole table.
pub fn quests_from_value(value: Value) -> Result<Vec<QuestRecord>> {
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(DynQuestError::Deserialization(format!(
                "quest table must be an array, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        records.push(extract_record(index, entry)?);
    }
    Ok(records)
}

fn extract_record(index: usize, entry: Value) -> Result<QuestRecord> {
    // Recover the id up front so errors can name the record
    let id = entry
        .get("id")
        .and_then(Value::as_i64)
        .and_then(|id| i32::try_from(id).ok());

    serde_json::from_value(entry).map_err(|e| DynQuestError::MalformedRecord {
        index,
        id,
        reason: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
