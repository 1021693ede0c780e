//! Dynamic Quest Core - quest table loading, indexing and validation
//!
//! This crate loads the dynamic quest table (level-bracketed quest variants
//! with optional dialogue trees) from a JSON document, validates it, and
//! exposes the ordered records plus an id index.

pub mod config;
pub mod dialogue;
pub mod error;
pub mod index;
pub mod table;
pub mod validate;

pub use crate::config::{LoadOptions, QuestRecord};
pub use crate::error::{DynQuestError, Result};
pub use crate::index::build_index;
pub use crate::table::QuestTable;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Cached Table
// ============================================================================

/// Global quest table. Reloading swaps the whole `Arc`; a table is never
/// mutated in place, so snapshots handed out earlier stay valid.
static QUEST_TABLE: OnceCell<RwLock<Arc<QuestTable>>> = OnceCell::new();

/// Install `table` as the process-wide quest table
///
/// Replaces any previously installed table and returns the new snapshot.
pub fn install_table(table: QuestTable) -> Arc<QuestTable> {
    let table = Arc::new(table);
    let slot = QUEST_TABLE.get_or_init(|| RwLock::new(Arc::clone(&table)));
    *slot.write() = Arc::clone(&table);
    info!("Installed quest table ({} records)", table.len());
    table
}

/// Load the quest table from `path` and install it
pub fn init_table_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Arc<QuestTable>> {
    let table = QuestTable::from_path(path, options)?;
    Ok(install_table(table))
}

/// Check if a table has been installed
pub fn is_table_initialized() -> bool {
    QUEST_TABLE.get().is_some()
}

/// Current quest table snapshot
pub fn current_table() -> Result<Arc<QuestTable>> {
    QUEST_TABLE
        .get()
        .map(|table| Arc::clone(&table.read()))
        .ok_or(DynQuestError::TableNotInitialized)
}

/// Look up a quest in the installed table
pub fn quest(id: i32) -> Result<QuestRecord> {
    current_table()?.require(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::test_support;

    // The global is shared by every test in the binary, so all global
    // behavior is exercised in this single test.
    #[test]
    fn test_install_and_swap() {
        let first = QuestTable::from_records(
            vec![test_support::quest(1, "A")],
            &LoadOptions::default(),
        )
        .unwrap();
        let snapshot = install_table(first);
        assert!(is_table_initialized());
        assert_eq!(current_table().unwrap().len(), 1);
        assert_eq!(quest(1).unwrap().name, "A");
        assert!(matches!(quest(2), Err(DynQuestError::QuestNotFound(2))));

        let second = QuestTable::from_records(
            vec![test_support::quest(1, "A"), test_support::quest(2, "B")],
            &LoadOptions::default(),
        )
        .unwrap();
        install_table(second);

        // Old snapshot unchanged, new readers see the swap
        assert_eq!(snapshot.len(), 1);
        assert_eq!(current_table().unwrap().len(), 2);
        assert_eq!(quest(2).unwrap().name, "B");
    }
}
