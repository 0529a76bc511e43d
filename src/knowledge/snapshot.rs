use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::knowledge::store::{KnowledgeError, KnowledgeStore};
use crate::types::SnapshotVersion;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Snapshot build parameters; hashed into the snapshot version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    pub version: String,
    pub hash_algorithm: String,
}

impl SnapshotConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRowCounts {
    pub words: usize,
    pub symbols: usize,
    pub subject: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub snapshot_version: SnapshotVersion,
    pub build_config: SnapshotConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub table_rows: TableRowCounts,
}

impl SnapshotManifest {
    pub fn for_store(store: &KnowledgeStore, config: SnapshotConfig) -> Self {
        SnapshotManifest {
            snapshot_version: compute_version(store, &config),
            build_config: config,
            created_at: Utc::now(),
            table_rows: TableRowCounts {
                words: store.words.len(),
                symbols: store.symbols.len(),
                subject: store.subject.len(),
            },
        }
    }
}

/// Hash the store's counts into a version string.
///
/// Only config and counts enter the hash; spam fractions are derived from
/// counts and excluded. Tables iterate in sorted token order, so the hash
/// is independent of merge order.
pub fn compute_version(store: &KnowledgeStore, config: &SnapshotConfig) -> SnapshotVersion {
    let mut canonical = String::new();
    canonical.push_str(&config.version);
    canonical.push('\n');
    canonical.push_str(&config.hash_algorithm);
    canonical.push('\n');

    let tables = [
        ("words", &store.words),
        ("symbols", &store.symbols),
        ("subject", &store.subject),
    ];
    for (name, table) in tables {
        for (token, record) in table.iter() {
            canonical.push_str(name);
            canonical.push(':');
            canonical.push_str(token);
            canonical.push(':');
            canonical.push_str(&record.spam.to_string());
            canonical.push(':');
            canonical.push_str(&record.ham.to_string());
            canonical.push('\n');
        }
    }

    SnapshotVersion::from_content(canonical.as_bytes())
}

pub(crate) fn write_manifest(dir: &Path, manifest: &SnapshotManifest) -> Result<(), KnowledgeError> {
    let tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(tmp.as_file(), manifest)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dir.join(MANIFEST_FILE))?;
    Ok(())
}

/// Recompute the snapshot version from loaded tables and compare it
/// against the manifest. Snapshots without a manifest load unverified.
pub(crate) fn verify_snapshot(dir: &Path, store: &KnowledgeStore) -> Result<(), KnowledgeError> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(());
    }

    let manifest: SnapshotManifest = serde_json::from_reader(fs::File::open(&path)?)?;
    let actual = compute_version(store, &manifest.build_config);
    if actual != manifest.snapshot_version {
        return Err(KnowledgeError::SnapshotMismatch {
            expected: manifest.snapshot_version.as_str().to_string(),
            actual: actual.as_str().to_string(),
        });
    }
    Ok(())
}
