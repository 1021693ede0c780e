//! Load-time validation of quest records
//!
//! Runs before the index is built. Duplicate quest ids and (under the
//! `deny` policy) dangling dialogue references fail the load. Everything
//! else is collected into a [`ValidationReport`] and logged.

mod checks;


pub use checks::*;

use crate::config::{DanglingPolicy, DuplicatePolicy, LoadOptions, QuestRecord};
use crate::error::{DynQuestError, Result};
use crate::index::duplicate_ids;
use std::fmt;
use tracing::warn;

/// Where a dangling reference was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    NodeNext,
    StartId,
    LineNext,
    OptionNext,
}

impl ReferenceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceSource::NodeNext => "node next",
            ReferenceSource::StartId => "start id",
            ReferenceSource::LineNext => "line next",
            ReferenceSource::OptionNext => "option next",
        }
    }
}

/// A single non-fatal finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    DuplicateQuestId {
        id: i32,
        first: usize,
        second: usize,
    },
    DanglingReference {
        quest_id: i32,
        source: ReferenceSource,
        /// Node id or line/option id holding the reference
        from: String,
        target: String,
    },
    DuplicateNodeId {
        quest_id: i32,
        node_id: String,
    },
    DuplicateLineId {
        quest_id: i32,
        line_id: i64,
    },
}

impl ValidationIssue {
    pub fn quest_id(&self) -> i32 {
        match self {
            ValidationIssue::DuplicateQuestId { id, .. } => *id,
            ValidationIssue::DanglingReference { quest_id, .. }
            | ValidationIssue::DuplicateNodeId { quest_id, .. }
            | ValidationIssue::DuplicateLineId { quest_id, .. } => *quest_id,
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, ValidationIssue::DanglingReference { .. })
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateQuestId { id, first, second } => {
                write!(f, "duplicate quest id {} at indices {} and {}", id, first, second)
            }
            ValidationIssue::DanglingReference {
                quest_id,
                source,
                from,
                target,
            } => write!(
                f,
                "quest {}: {} `{}` points to missing `{}`",
                quest_id,
                source.as_str(),
                from,
                target
            ),
            ValidationIssue::DuplicateNodeId { quest_id, node_id } => {
                write!(f, "quest {}: node id `{}` appears more than once", quest_id, node_id)
            }
            ValidationIssue::DuplicateLineId { quest_id, line_id } => {
                write!(f, "quest {}: line id {} appears more than once", quest_id, line_id)
            }
        }
    }
}

/// Findings collected while loading a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn dangling(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_dangling())
    }

    pub fn for_quest(&self, quest_id: i32) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.quest_id() == quest_id)
    }
}

/// Validate a record list under `options`
///
/// Warnings are logged through `tracing` once collected.
pub fn validate(records: &[QuestRecord], options: &LoadOptions) -> Result<ValidationReport> {
    let mut issues = Vec::new();

    for collision in duplicate_ids(records) {
        match options.duplicate_ids {
            DuplicatePolicy::Reject => {
                return Err(DynQuestError::DuplicateQuestId {
                    id: collision.id,
                    first: collision.first,
                    second: collision.second,
                })
            }
            DuplicatePolicy::LastWriteWins => issues.push(ValidationIssue::DuplicateQuestId {
                id: collision.id,
                first: collision.first,
                second: collision.second,
            }),
        }
    }

    for record in records {
        for issue in check_record(record) {
            if let ValidationIssue::DanglingReference {
                quest_id,
                source,
                from,
                target,
            } = &issue
            {
                match options.dangling_references {
                    DanglingPolicy::Ignore => continue,
                    DanglingPolicy::Deny => {
                        return Err(DynQuestError::DanglingDialogueReference {
                            quest_id: *quest_id,
                            source_kind: source.as_str(),
                            from: from.clone(),
                            target: target.clone(),
                        })
                    }
                    DanglingPolicy::Warn => {}
                }
            }
            issues.push(issue);
        }
    }

    for issue in &issues {
        warn!("{}", issue);
    }

    Ok(ValidationReport { issues })
}
