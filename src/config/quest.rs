//! Quest record structures

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dialogue::DialogueNode;

/// `completeNum` value meaning "no completion cap"
pub const UNLIMITED_COMPLETIONS: i32 = -1;

/// One dynamically-offered quest variant
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestRecord {
    pub id: i32,
    pub name: String,
    /// Inclusive player-level bracket; `None` means no level gating
    #[serde(
        default,
        deserialize_with = "deserialize_level",
        serialize_with = "serialize_level"
    )]
    pub level: Option<LevelRange>,
    pub region_id: i32,
    pub sub_region_id: i32,
    /// Offer weight, consumed by an external selector
    pub chance: i32,
    pub complete_num: i32,
    pub day_limit: bool,
    pub reward: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<DialogueNode>>,
    /// Overrides the default entry node when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ids: Option<Vec<String>>,
}

impl QuestRecord {
    /// Whether a player of `level` may be offered this quest
    pub fn is_eligible(&self, level: i32) -> bool {
        self.level.map_or(true, |range| range.contains(level))
    }

    /// Completion cap, or `None` when completions are unlimited
    pub fn completion_cap(&self) -> Option<u32> {
        if self.complete_num == UNLIMITED_COMPLETIONS {
            None
        } else {
            Some(self.complete_num.max(0) as u32)
        }
    }

    pub fn has_dialogue(&self) -> bool {
        self.nodes.as_ref().is_some_and(|nodes| !nodes.is_empty())
    }

    /// Dialogue nodes, empty for quests without scripted dialogue
    pub fn nodes(&self) -> &[DialogueNode] {
        self.nodes.as_deref().unwrap_or(&[])
    }
}

/// Inclusive `[min, max]` level bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelRange {
    pub min: i32,
    pub max: i32,
}

impl LevelRange {
    /// Build a range, rejecting `min > max`
    pub fn new(min: i32, max: i32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, level: i32) -> bool {
        self.min <= level && level <= self.max
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<LevelRange>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<i32>> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some([]) => Ok(None),
        Some(&[min, max]) => LevelRange::new(min, max).map(Some).ok_or_else(|| {
            D::Error::custom(format!("level range [{}, {}] has min above max", min, max))
        }),
        Some(other) => Err(D::Error::invalid_length(
            other.len(),
            &"an empty level or a [min, max] pair",
        )),
    }
}

fn serialize_level<S>(level: &Option<LevelRange>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match level {
        Some(range) => [range.min, range.max].serialize(serializer),
        None => <[i32; 0]>::default().serialize(serializer),
    }
}
