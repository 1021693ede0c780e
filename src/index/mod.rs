//! Quest id index
//!
//! A single pass over the ordered record list. Later records overwrite
//! earlier ones sharing an id, so the index may be smaller than the list.

#[cfg(test)]
mod property_tests;

use crate::config::QuestRecord;
use ahash::AHashMap;

/// Build the id -> record map, last write wins
pub fn build_index(records: &[QuestRecord]) -> AHashMap<i32, &QuestRecord> {
    let mut index = AHashMap::with_capacity(records.len());
    for record in records {
        index.insert(record.id, record);
    }
    index
}

/// Same fold as [`build_index`], keyed to array positions
pub fn index_positions(records: &[QuestRecord]) -> AHashMap<i32, usize> {
    let mut index = AHashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        index.insert(record.id, position);
    }
    index
}

/// An id shared by two records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCollision {
    pub id: i32,
    pub first: usize,
    pub second: usize,
}

/// Every collision in array order, each reported against the previous holder
pub fn duplicate_ids(records: &[QuestRecord]) -> Vec<IdCollision> {
    let mut seen: AHashMap<i32, usize> = AHashMap::with_capacity(records.len());
    let mut collisions = Vec::new();

    for (position, record) in records.iter().enumerate() {
        if let Some(first) = seen.insert(record.id, position) {
            collisions.push(IdCollision {
                id: record.id,
                first,
                second: position,
            });
        }
    }

    collisions
}
