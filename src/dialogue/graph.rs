//! Dialogue graph view over one quest record

use crate::config::{DialogueLine, DialogueNode, QuestRecord};
use ahash::AHashMap;

/// Read-only lookup tables over a quest's dialogue nodes and lines
#[derive(Debug)]
pub struct DialogueGraph<'a> {
    quest: &'a QuestRecord,
    nodes: AHashMap<&'a str, &'a DialogueNode>,
    lines: AHashMap<i64, &'a DialogueLine>,
}

impl<'a> DialogueGraph<'a> {
    /// Build lookups for `quest`. The first node or line with a given id wins.
    pub fn new(quest: &'a QuestRecord) -> Self {
        let mut nodes = AHashMap::with_capacity(quest.nodes().len());
        let mut lines = AHashMap::new();

        for node in quest.nodes() {
            nodes.entry(node.id.as_str()).or_insert(node);
            for line in &node.dialogues {
                lines.entry(line.id).or_insert(line);
            }
        }

        Self {
            quest,
            nodes,
            lines,
        }
    }

    pub fn quest(&self) -> &'a QuestRecord {
        self.quest
    }

    #[inline]
    pub fn node(&self, id: &str) -> Option<&'a DialogueNode> {
        self.nodes.get(id).copied()
    }

    #[inline]
    pub fn line(&self, id: i64) -> Option<&'a DialogueLine> {
        self.lines.get(&id).copied()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn has_line(&self, id: i64) -> bool {
        self.lines.contains_key(&id)
    }

    /// Entry nodes: `startIds` when the record sets them, else the first node.
    /// Start ids that resolve to nothing are skipped.
    pub fn entry_nodes(&self) -> Vec<&'a DialogueNode> {
        match &self.quest.start_ids {
            Some(start_ids) => start_ids.iter().filter_map(|id| self.node(id)).collect(),
            None => self.quest.nodes().first().into_iter().collect(),
        }
    }

    /// Nodes following `id` at node level, skipping unresolved ids
    pub fn successors(&self, id: &str) -> Vec<&'a DialogueNode> {
        self.node(id)
            .map(|node| node.next_ids().iter().filter_map(|next| self.node(next)).collect())
            .unwrap_or_default()
    }

    /// Node that holds line `line_id`
    pub fn node_of_line(&self, line_id: i64) -> Option<&'a DialogueNode> {
        self.quest
            .nodes()
            .iter()
            .find(|node| node.dialogues.iter().any(|line| line.id == line_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
