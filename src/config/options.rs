//! Load-time policies

use serde::{Deserialize, Serialize};

/// How the loader treats two records sharing an id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Refuse the whole table
    #[default]
    Reject,
    /// Keep both in the list, the later one wins in the index
    LastWriteWins,
}

/// How the loader treats dialogue `next` values that resolve to nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DanglingPolicy {
    #[default]
    Warn,
    Deny,
    Ignore,
}

/// Options for loading a quest table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadOptions {
    pub duplicate_ids: DuplicatePolicy,
    pub dangling_references: DanglingPolicy,
}

impl LoadOptions {
    /// Reject both duplicate ids and dangling references
    pub fn strict() -> Self {
        Self {
            duplicate_ids: DuplicatePolicy::Reject,
            dangling_references: DanglingPolicy::Deny,
        }
    }

    /// Index-only behavior: last write wins, references unchecked
    pub fn lenient() -> Self {
        Self {
            duplicate_ids: DuplicatePolicy::LastWriteWins,
            dangling_references: DanglingPolicy::Ignore,
        }
    }
}
