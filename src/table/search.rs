//! Keyword search over the quest table

use super::QuestTable;
use crate::config::QuestRecord;

/// Numeric keywords a record is findable by
pub fn search_keywords(record: &QuestRecord) -> Vec<i32> {
    let mut keywords = vec![record.id, record.region_id, record.sub_region_id, record.chance];
    if let Some(level) = record.level {
        keywords.push(level.min);
        keywords.push(level.max);
    }
    keywords.push(record.complete_num);
    keywords
}

/// Whether `record` matches a normalized (trimmed, lowercased) query
fn matches(record: &QuestRecord, query: &str) -> bool {
    if record.name.to_lowercase().contains(query) || record.id.to_string().starts_with(query) {
        return true;
    }

    match query.parse::<i32>() {
        Ok(number) => search_keywords(record).contains(&number),
        Err(_) => false,
    }
}

impl QuestTable {
    /// Find records by name substring, id prefix, or exact numeric keyword
    ///
    /// Results keep authored order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&QuestRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| matches(record, &query))
            .collect()
    }
}
