//! Loaded quest table
//!
//! Holds the authored record list in order plus its id index. A table is
//! immutable once built.

mod search;


pub use search::*;

use crate::config::{self, LoadOptions, QuestRecord};
use crate::dialogue::DialogueGraph;
use crate::error::{DynQuestError, Result};
use crate::index::{build_index, index_positions};
use crate::validate::{validate, ValidationReport};
use ahash::AHashMap;
use std::path::Path;
use tracing::{debug, info};

/// Ordered quest records with O(1) id lookup
#[derive(Debug)]
pub struct QuestTable {
    records: Vec<QuestRecord>,
    positions: AHashMap<i32, usize>,
    report: ValidationReport,
}

impl QuestTable {
    /// Validate `records`, then index them
    pub fn from_records(records: Vec<QuestRecord>, options: &LoadOptions) -> Result<Self> {
        let report = validate(&records, options)?;
        let positions = index_positions(&records);
        debug!(
            "Indexed {} quest records under {} ids",
            records.len(),
            positions.len()
        );

        info!(
            "Loaded {} dynamic quests ({} with dialogue, {} warnings)",
            records.len(),
            records.iter().filter(|r| r.has_dialogue()).count(),
            report.len()
        );

        Ok(Self {
            records,
            positions,
            report,
        })
    }

    pub fn from_json_str(document: &str, options: &LoadOptions) -> Result<Self> {
        Self::from_records(config::parse_quests(document)?, options)
    }

    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading dynamic quests from {:?}", path);
        Self::from_records(config::read_quests(path)?, options)
    }

    /// Records in authored order
    pub fn records(&self) -> &[QuestRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestRecord> {
        self.records.iter()
    }

    #[inline]
    pub fn get(&self, id: i32) -> Option<&QuestRecord> {
        self.positions.get(&id).map(|&position| &self.records[position])
    }

    /// Like [`get`](Self::get) but reports a missing id as an error
    pub fn require(&self, id: i32) -> Result<&QuestRecord> {
        self.get(id).ok_or(DynQuestError::QuestNotFound(id))
    }

    pub fn contains(&self, id: i32) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of records, duplicates included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct ids
    pub fn id_count(&self) -> usize {
        self.positions.len()
    }

    /// The id -> record map
    pub fn index(&self) -> AHashMap<i32, &QuestRecord> {
        build_index(&self.records)
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Dialogue lookups for one quest
    pub fn dialogue(&self, id: i32) -> Option<DialogueGraph<'_>> {
        self.get(id).map(DialogueGraph::new)
    }

    /// Level-bracket siblings sharing `name`, in authored order
    pub fn variants_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a QuestRecord> {
        self.records.iter().filter(move |r| r.name == name)
    }

    /// Records tagged with `region_id`, optionally narrowed to one sub-region
    pub fn in_region(
        &self,
        region_id: i32,
        sub_region_id: Option<i32>,
    ) -> impl Iterator<Item = &QuestRecord> {
        self.records.iter().filter(move |r| {
            r.region_id == region_id && sub_region_id.map_or(true, |sub| r.sub_region_id == sub)
        })
    }

    /// Records a player of `level` may be offered
    pub fn eligible_for(&self, level: i32) -> impl Iterator<Item = &QuestRecord> {
        self.records.iter().filter(move |r| r.is_eligible(level))
    }
}

impl<'a> IntoIterator for &'a QuestTable {
    type Item = &'a QuestRecord;
    type IntoIter = std::slice::Iter<'a, QuestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
