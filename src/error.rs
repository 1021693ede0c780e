//! Error types for the dynamic quest table

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading and querying the quest table
#[derive(Error, Debug)]
pub enum DynQuestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Malformed quest record at index {index}{}: {reason}", fmt_id(.id))]
    MalformedRecord {
        index: usize,
        id: Option<i32>,
        reason: String,
    },

    #[error("Duplicate quest id {id} at indices {first} and {second}")]
    DuplicateQuestId { id: i32, first: usize, second: usize },

    #[error("Quest {quest_id}: {source_kind} `{from}` points to missing `{target}`")]
    DanglingDialogueReference {
        quest_id: i32,
        source_kind: &'static str,
        from: String,
        target: String,
    },

    #[error("Quest not found: {0}")]
    QuestNotFound(i32),

    #[error("Quest table not initialized")]
    TableNotInitialized,
}

fn fmt_id(id: &Option<i32>) -> String {
    match id {
        Some(id) => format!(" (id {})", id),
        None => String::new(),
    }
}

/// Result type alias for the quest table
pub type Result<T> = std::result::Result<T, DynQuestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message() {
        let with_id = DynQuestError::MalformedRecord {
            index: 3,
            id: Some(100101),
            reason: "missing field `chance`".to_string(),
        };
        assert_eq!(
            with_id.to_string(),
            "Malformed quest record at index 3 (id 100101): missing field `chance`"
        );

        let without_id = DynQuestError::MalformedRecord {
            index: 0,
            id: None,
            reason: "missing field `id`".to_string(),
        };
        assert_eq!(
            without_id.to_string(),
            "Malformed quest record at index 0: missing field `id`"
        );
    }

    #[test]
    fn test_dangling_reference_message() {
        let err = DynQuestError::DanglingDialogueReference {
            quest_id: 100301,
            source_kind: "line next",
            from: "71000601".to_string(),
            target: "71000612".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Quest 100301: line next `71000601` points to missing `71000612`"
        );
    }
}
