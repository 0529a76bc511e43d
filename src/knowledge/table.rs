use std::collections::BTreeMap;

use crate::types::Label;

/// Minimum total observations for a word to survive the post-training
/// pruning pass.
pub const MIN_EVIDENCE: u64 = 10;

/// Spam-fraction band treated as carrying no polarity.
pub const NEUTRAL_BAND_LOW: f64 = 0.4;
pub const NEUTRAL_BAND_HIGH: f64 = 0.6;

/// Accumulated spam/ham evidence for one token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenRecord {
    pub spam: u64,
    pub ham: u64,
    /// `spam / (spam + ham)`; undefined (left untouched) while both
    /// counts are zero.
    pub spam_fraction: f64,
}

impl TokenRecord {
    pub fn total(&self) -> u64 {
        self.spam + self.ham
    }
}

/// Per-token spam/ham statistics, unique by token.
///
/// Backed by a `BTreeMap` so lookups are keyed and iteration order is
/// deterministic, which keeps persisted snapshots byte-stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeTable {
    records: BTreeMap<String, TokenRecord>,
}

impl KnowledgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<&TokenRecord> {
        self.records.get(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenRecord)> {
        self.records.iter().map(|(token, rec)| (token.as_str(), rec))
    }

    pub(crate) fn insert_record(&mut self, token: String, record: TokenRecord) {
        self.records.insert(token, record);
    }

    /// Merge one message's token counts under the given label, then
    /// recompute every record's spam fraction.
    ///
    /// Counts are added to the matching record (exact, case-sensitive
    /// token match), creating records as needed. Commutative and additive
    /// over observations: merging in any order yields the same table, and
    /// repeated observations accumulate.
    pub fn merge<I>(&mut self, observed: I, label: Label)
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        for (token, count) in observed {
            let record = self.records.entry(token).or_insert(TokenRecord {
                spam: 0,
                ham: 0,
                spam_fraction: 0.0,
            });
            match label {
                Label::Spam => record.spam += u64::from(count),
                Label::Ham => record.ham += u64::from(count),
            }
        }
        self.recompute_fractions();
    }

    /// Recompute `spam_fraction` for every record. Zero-total records are
    /// skipped; their fraction is undefined.
    fn recompute_fractions(&mut self) {
        for record in self.records.values_mut() {
            let total = record.total();
            if total > 0 {
                record.spam_fraction = record.spam as f64 / total as f64;
            }
        }
    }

    /// Post-training pruning: keep only tokens with at least
    /// [`MIN_EVIDENCE`] observations and a spam fraction strictly outside
    /// the neutral band. Low-evidence tokens are dropped regardless of
    /// polarity.
    pub fn retain_brutal(&mut self) {
        self.records.retain(|_, record| {
            record.total() >= MIN_EVIDENCE
                && !(NEUTRAL_BAND_LOW..=NEUTRAL_BAND_HIGH).contains(&record.spam_fraction)
        });
    }
}

/// Fraction-only projection of a knowledge table, used in read-only
/// scoring mode. Counts are discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringTable {
    fractions: BTreeMap<String, f64>,
}

impl ScoringTable {
    pub fn spam_fraction(&self, token: &str) -> Option<f64> {
        self.fractions.get(token).copied()
    }

    pub fn insert(&mut self, token: impl Into<String>, fraction: f64) {
        self.fractions.insert(token.into(), fraction);
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

impl FromIterator<(String, f64)> for ScoringTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        ScoringTable {
            fractions: iter.into_iter().collect(),
        }
    }
}
