//! Property tests for the quest id index
//!
//! Property 1: Index completeness under last-write-wins
//! Property 2: Index size bound
//! Property 8: Idempotent construction

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::config::{LevelRange, QuestRecord};
use crate::index::{build_index, duplicate_ids, index_positions};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate a record with a small id space so collisions actually happen
fn record_strategy() -> impl Strategy<Value = QuestRecord> {
    (
        1..=40i32,                               // id
        "[a-z]{1,8}",                            // name
        prop::option::of((1..=60i32, 0..=30i32)), // level (min, span)
        1001..=1005i32,                          // region
        0..=100i32,                              // chance
        -1..=5i32,                               // completeNum
        any::<bool>(),                           // dayLimit
        prop::collection::vec(1..=999_999i32, 0..=3),
    )
        .prop_map(
            |(id, name, level, region_id, chance, complete_num, day_limit, reward)| QuestRecord {
                id,
                name,
                level: level.and_then(|(min, span)| LevelRange::new(min, min + span)),
                region_id,
                sub_region_id: region_id * 100 + 1,
                chance,
                complete_num,
                day_limit,
                reward,
                nodes: None,
                start_ids: None,
            },
        )
}

fn records_strategy() -> impl Strategy<Value = Vec<QuestRecord>> {
    prop::collection::vec(record_strategy(), 0..=60)
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Every id maps to the last record in array order carrying it
    #[test]
    fn prop_index_completeness(records in records_strategy()) {
        let index = build_index(&records);
        for record in &records {
            let last = records.iter().rev().find(|r| r.id == record.id).unwrap();
            prop_assert_eq!(index.get(&record.id).copied(), Some(last));
        }
    }

    /// The index never grows past the list, and matches it exactly iff ids are unique
    #[test]
    fn prop_index_size_bound(records in records_strategy()) {
        let index = build_index(&records);
        let unique: HashSet<i32> = records.iter().map(|r| r.id).collect();

        prop_assert!(index.len() <= records.len());
        prop_assert_eq!(index.len(), unique.len());
        prop_assert_eq!(index.len() == records.len(), duplicate_ids(&records).is_empty());
    }

    /// Building twice yields equal maps
    #[test]
    fn prop_index_idempotent(records in records_strategy()) {
        let first: HashMap<i32, &QuestRecord> = build_index(&records).iter().map(|(k, v)| (*k, *v)).collect();
        let second: HashMap<i32, &QuestRecord> = build_index(&records).iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(first, second);

        let first: HashMap<i32, usize> = index_positions(&records).iter().map(|(k, v)| (*k, *v)).collect();
        let second: HashMap<i32, usize> = index_positions(&records).iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(first, second);
    }

    /// Positional index agrees with the reference index
    #[test]
    fn prop_positions_agree(records in records_strategy()) {
        let index = build_index(&records);
        let positions = index_positions(&records);
        prop_assert_eq!(index.len(), positions.len());
        for (id, position) in positions.iter() {
            prop_assert_eq!(index[id], &records[*position]);
        }
    }

    /// Collision count equals list length minus distinct ids
    #[test]
    fn prop_collision_count(records in records_strategy()) {
        let unique: HashSet<i32> = records.iter().map(|r| r.id).collect();
        prop_assert_eq!(duplicate_ids(&records).len(), records.len() - unique.len());
    }
}
