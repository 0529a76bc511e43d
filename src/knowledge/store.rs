use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::knowledge::snapshot::{self, SnapshotConfig, SnapshotManifest};
use crate::knowledge::table::{KnowledgeTable, ScoringTable, TokenRecord};
use crate::tokenize::TokenizedMessage;
use crate::types::Label;

pub const WORDS_FILE: &str = "words.csv";
pub const SYMBOLS_FILE: &str = "symbols.csv";
pub const SUBJECT_FILE: &str = "subject.csv";

const TABLE_HEADER: [&str; 4] = ["symbol", "spam", "ham", "spam_perc"];

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("Atomic write failed: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("No knowledge snapshot at {0}; train before scoring")]
    MissingSnapshot(PathBuf),
    #[error("Snapshot version mismatch: manifest says {expected}, tables hash to {actual}")]
    SnapshotMismatch { expected: String, actual: String },
}

/// One CSV row of a persisted knowledge table.
#[derive(Debug, Serialize, Deserialize)]
struct TableRow {
    symbol: String,
    spam: u64,
    ham: u64,
    spam_perc: f64,
}

/// Fraction-only row projection for scoring mode. Count columns in the
/// file are ignored.
#[derive(Debug, Deserialize)]
struct ScoringRow {
    symbol: String,
    spam_perc: f64,
}

/// The three knowledge tables of a trained classifier.
///
/// Persisted as a snapshot directory of `words.csv`, `symbols.csv`,
/// `subject.csv`, and `manifest.json`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeStore {
    pub words: KnowledgeTable,
    pub symbols: KnowledgeTable,
    pub subject: KnowledgeTable,
}

/// Fraction-only projections of the three tables, for scoring runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringTables {
    pub words: ScoringTable,
    pub symbols: ScoringTable,
    pub subject: ScoringTable,
}

impl KnowledgeStore {
    /// Load a full snapshot. A missing snapshot directory loads as an
    /// empty store so the first training run can bootstrap itself; a
    /// present-but-corrupt snapshot fails.
    pub fn load(dir: &Path) -> Result<Self, KnowledgeError> {
        if !dir.exists() {
            debug!(snapshot = %dir.display(), "no snapshot, starting empty");
            return Ok(Self::default());
        }

        let store = Self {
            words: read_table(&dir.join(WORDS_FILE))?,
            symbols: read_table(&dir.join(SYMBOLS_FILE))?,
            subject: read_table(&dir.join(SUBJECT_FILE))?,
        };
        snapshot::verify_snapshot(dir, &store)?;

        debug!(
            snapshot = %dir.display(),
            words = store.words.len(),
            symbols = store.symbols.len(),
            subject = store.subject.len(),
            "snapshot loaded"
        );
        Ok(store)
    }

    /// Load the fraction-only scoring projection. Scoring requires a
    /// previously persisted snapshot.
    pub fn load_scoring(dir: &Path) -> Result<ScoringTables, KnowledgeError> {
        if !dir.exists() {
            return Err(KnowledgeError::MissingSnapshot(dir.to_path_buf()));
        }

        Ok(ScoringTables {
            words: read_scoring_table(&dir.join(WORDS_FILE))?,
            symbols: read_scoring_table(&dir.join(SYMBOLS_FILE))?,
            subject: read_scoring_table(&dir.join(SUBJECT_FILE))?,
        })
    }

    /// Merge one message's token counts into all three tables.
    pub fn absorb(&mut self, message: &TokenizedMessage, label: Label) {
        self.words
            .merge(message.words.iter().map(|(t, c)| (t.clone(), *c)), label);
        self.symbols.merge(
            message.symbols.iter().map(|(s, c)| (s.to_string(), *c)),
            label,
        );
        if let Some(subject) = &message.subject {
            self.subject
                .merge(subject.iter().map(|(t, c)| (t.clone(), *c)), label);
        }
    }

    /// Write the snapshot: three CSV tables plus a hash-versioned
    /// manifest. Each file lands via temp-file-then-rename so a crashed
    /// run never leaves a half-written table behind.
    pub fn save(&self, dir: &Path, config: SnapshotConfig) -> Result<SnapshotManifest, KnowledgeError> {
        fs::create_dir_all(dir)?;

        write_table(dir, WORDS_FILE, &self.words)?;
        write_table(dir, SYMBOLS_FILE, &self.symbols)?;
        write_table(dir, SUBJECT_FILE, &self.subject)?;

        let manifest = SnapshotManifest::for_store(self, config);
        snapshot::write_manifest(dir, &manifest)?;

        info!(
            snapshot = %dir.display(),
            version = manifest.snapshot_version.as_str(),
            "snapshot saved"
        );
        Ok(manifest)
    }
}

fn read_table(path: &Path) -> Result<KnowledgeTable, KnowledgeError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut table = KnowledgeTable::new();
    for row in reader.deserialize() {
        let row: TableRow = row?;
        table.insert_record(
            row.symbol,
            TokenRecord {
                spam: row.spam,
                ham: row.ham,
                spam_fraction: row.spam_perc,
            },
        );
    }
    Ok(table)
}

fn read_scoring_table(path: &Path) -> Result<ScoringTable, KnowledgeError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut table = ScoringTable::default();
    for row in reader.deserialize() {
        let row: ScoringRow = row?;
        table.insert(row.symbol, row.spam_perc);
    }
    Ok(table)
}

fn write_table(dir: &Path, file: &str, table: &KnowledgeTable) -> Result<(), KnowledgeError> {
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file());
        writer.write_record(TABLE_HEADER)?;
        for (token, record) in table.iter() {
            writer.serialize(TableRow {
                symbol: token.to_string(),
                spam: record.spam,
                ham: record.ham,
                spam_perc: record.spam_fraction,
            })?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(dir.join(file))?;
    Ok(())
}
