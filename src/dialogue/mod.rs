//! Per-quest dialogue lookups
//!
//! Node ids and line ids are only meaningful inside their owning quest;
//! sibling level-bracket records reuse them verbatim. A graph is therefore
//! always built from a single record.

mod graph;

pub use graph::*;
