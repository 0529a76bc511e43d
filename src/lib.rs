//! Deterministic frequency-based spam classification for email corpora.
//!
//! `mailsift-core` provides email text normalization, token counting,
//! spam/ham frequency accumulation with versioned CSV snapshots, weighted
//! frequency scoring against a fixed threshold, and confusion-matrix
//! evaluation. All operations are deterministic — identical corpora always
//! produce identical snapshots and predictions, byte-for-byte.
//!
//! See <https://github.com/mailsift/mailsift> for the full platform.

pub mod classify;
pub mod corpus;
pub mod eval;
pub mod knowledge;
pub mod message;
pub mod tokenize;
pub mod types;
