//! Per-record dialogue checks

use super::{ReferenceSource, ValidationIssue};
use crate::config::QuestRecord;
use crate::dialogue::DialogueGraph;
use ahash::AHashSet;

/// Run every per-record check, in node order
pub fn check_record(record: &QuestRecord) -> Vec<ValidationIssue> {
    let mut issues = check_duplicate_ids(record);
    issues.extend(check_references(record));
    issues
}

/// Node ids and line ids that repeat inside one quest
pub fn check_duplicate_ids(record: &QuestRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut node_ids = AHashSet::new();
    let mut line_ids = AHashSet::new();

    for node in record.nodes() {
        if !node_ids.insert(node.id.as_str()) {
            issues.push(ValidationIssue::DuplicateNodeId {
                quest_id: record.id,
                node_id: node.id.clone(),
            });
        }
        for line in &node.dialogues {
            if !line_ids.insert(line.id) {
                issues.push(ValidationIssue::DuplicateLineId {
                    quest_id: record.id,
                    line_id: line.id,
                });
            }
        }
    }

    issues
}

/// Node `next`, `startIds`, line `next` and option `next` that do not resolve
pub fn check_references(record: &QuestRecord) -> Vec<ValidationIssue> {
    let graph = DialogueGraph::new(record);
    let mut issues = Vec::new();

    let mut dangling = |source: ReferenceSource, from: String, target: String| {
        issues.push(ValidationIssue::DanglingReference {
            quest_id: record.id,
            source,
            from,
            target,
        });
    };

    for start in record.start_ids.iter().flatten() {
        if !graph.has_node(start) {
            dangling(ReferenceSource::StartId, record.id.to_string(), start.clone());
        }
    }

    for node in record.nodes() {
        for next in node.next_ids() {
            if !graph.has_node(next) {
                dangling(ReferenceSource::NodeNext, node.id.clone(), next.clone());
            }
        }

        for line in &node.dialogues {
            if let Some(next) = line.next {
                if !graph.has_line(next) {
                    dangling(ReferenceSource::LineNext, line.id.to_string(), next.to_string());
                }
            }

            for option in line.options() {
                if let Some(next) = option.next {
                    if !graph.has_line(next) {
                        dangling(
                            ReferenceSource::OptionNext,
                            option.id.to_string(),
                            next.to_string(),
                        );
                    }
                }
            }
        }
    }

    issues
}
