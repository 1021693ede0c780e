//! Dialogue tree structures

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Node tag value for plain conversation nodes
pub const TALK_NODE: &str = "TalkNode";

/// One scripted unit of conversation within a quest
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialogueNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Editor label, unused at runtime
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dialogues: Vec<DialogueLine>,
    /// Follow-up node ids; `None` marks a leaf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<SmallVec<[String; 2]>>,
}

impl DialogueNode {
    pub fn next_ids(&self) -> &[String] {
        self.next.as_deref().unwrap_or(&[])
    }

    pub fn is_leaf(&self) -> bool {
        self.next_ids().is_empty()
    }
}

/// Open node tag. Unknown tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Talk,
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Talk => TALK_NODE,
            NodeKind::Other(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        if tag == TALK_NODE {
            NodeKind::Talk
        } else {
            NodeKind::Other(tag)
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Talk => TALK_NODE.to_string(),
            NodeKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single spoken or narrated line
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialogueLine {
    pub id: i64,
    /// Raw text; `{nickname}` style tokens are left for the client to render
    pub content: String,
    /// Speaker; `None` for narration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npc: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<i64>,
    /// Player choices; playback pauses here instead of following `next`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DialogueOption>>,
}

impl DialogueLine {
    pub fn options(&self) -> &[DialogueOption] {
        self.options.as_deref().unwrap_or(&[])
    }

    pub fn is_choice(&self) -> bool {
        !self.options().is_empty()
    }
}

/// A player-facing choice attached to a line
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialogueOption {
    pub id: i64,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impr: Option<Impression>,
}

/// Reputation delta on a regional axis, stored as `[regionId, axis, delta]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "(i32, String, i32)", into = "(i32, String, i32)")]
pub struct Impression {
    pub region_id: i32,
    /// Free-form axis name such as `Morality` or `Benefit`
    pub axis: String,
    pub delta: i32,
}

impl From<(i32, String, i32)> for Impression {
    fn from((region_id, axis, delta): (i32, String, i32)) -> Self {
        Self {
            region_id,
            axis,
            delta,
        }
    }
}

impl From<Impression> for (i32, String, i32) {
    fn from(impr: Impression) -> Self {
        (impr.region_id, impr.axis, impr.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_talk_node_tag() {
        let node: DialogueNode = serde_json::from_value(json!({
            "id": "1716888064673118078",
            "type": "TalkNode",
            "name": "对话节点",
            "dialogues": [],
            "next": ["17212055560456186", "17212055621486390"]
        }))
        .unwrap();
        assert_eq!(node.kind, NodeKind::Talk);
        assert_eq!(node.next_ids().len(), 2);
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_unknown_node_tag_kept() {
        let node: DialogueNode = serde_json::from_value(json!({
            "id": "n1",
            "type": "BattleNode",
            "name": "",
            "dialogues": []
        }))
        .unwrap();
        assert_eq!(node.kind, NodeKind::Other("BattleNode".to_string()));
        assert!(node.is_leaf());

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], json!("BattleNode"));
        assert!(value.get("next").is_none());
    }

    #[test]
    fn test_option_impression() {
        let line: DialogueLine = serde_json::from_value(json!({
            "id": 71001608,
            "content": "{nickname}, what now?",
            "npc": 710016,
            "options": [
                {"id": 710016081, "content": "Help them", "next": 71001609, "impr": [1001, "Morality", 1]},
                {"id": 710016082, "content": "Walk away"}
            ]
        }))
        .unwrap();
        assert!(line.is_choice());
        let help = &line.options()[0];
        assert_eq!(
            help.impr,
            Some(Impression {
                region_id: 1001,
                axis: "Morality".to_string(),
                delta: 1,
            })
        );
        assert_eq!(help.next, Some(71001609));
        assert_eq!(line.options()[1].next, None);

        let value = serde_json::to_value(help).unwrap();
        assert_eq!(value["impr"], json!([1001, "Morality", 1]));
    }

    #[test]
    fn test_narration_line() {
        let line: DialogueLine = serde_json::from_value(json!({
            "id": 71000601,
            "content": "The wind picks up.",
            "next": 71000612
        }))
        .unwrap();
        assert_eq!(line.npc, None);
        assert_eq!(line.next, Some(71000612));
        assert!(!line.is_choice());
    }
}
