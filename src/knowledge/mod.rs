pub mod snapshot;
pub mod store;
pub mod table;

pub use snapshot::{SnapshotConfig, SnapshotManifest, TableRowCounts, MANIFEST_FILE};
pub use store::{
    KnowledgeError, KnowledgeStore, ScoringTables, SUBJECT_FILE, SYMBOLS_FILE, WORDS_FILE,
};
pub use table::{
    KnowledgeTable, ScoringTable, TokenRecord, MIN_EVIDENCE, NEUTRAL_BAND_HIGH, NEUTRAL_BAND_LOW,
};
