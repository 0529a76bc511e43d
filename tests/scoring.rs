use std::collections::BTreeMap;

use mailsift_core::classify::{FrequencyScorer, Scorer, SPAM_THRESHOLD};
use mailsift_core::knowledge::{ScoringTable, ScoringTables};
use mailsift_core::tokenize::TokenizedMessage;
use mailsift_core::types::Label;

fn word_counts(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
    pairs
        .iter()
        .map(|(token, count)| (token.to_string(), *count))
        .collect()
}

fn fractions(pairs: &[(&str, f64)]) -> ScoringTable {
    pairs
        .iter()
        .map(|(token, fraction)| (token.to_string(), *fraction))
        .collect()
}

fn message(words: &[(&str, u32)]) -> TokenizedMessage {
    TokenizedMessage {
        words: word_counts(words),
        symbols: BTreeMap::new(),
        subject: None,
    }
}

#[test]
fn golden_single_known_token_scores_its_fraction() {
    let tables = ScoringTables {
        words: fractions(&[("free", 0.9)]),
        symbols: ScoringTable::default(),
        subject: ScoringTable::default(),
    };
    let msg = message(&[("free", 2)]);

    let scorer = FrequencyScorer;
    let score = scorer.score_value(&scorer.score(&msg, &tables));
    assert!((score - 0.9).abs() < f64::EPSILON);
    assert_eq!(scorer.classify(&msg, &tables), Label::Spam);
}

#[test]
fn golden_unknown_vocabulary_defaults_to_ham() {
    let tables = ScoringTables {
        words: fractions(&[("free", 0.9)]),
        symbols: ScoringTable::default(),
        subject: ScoringTable::default(),
    };
    let msg = message(&[("quarterly", 3), ("forecast", 1)]);

    let scorer = FrequencyScorer;
    let details = scorer.score(&msg, &tables);
    assert_eq!(details.weight, 0);
    assert!(scorer.score_value(&details).abs() < f64::EPSILON);
    assert_eq!(scorer.classify(&msg, &tables), Label::Ham);
}

#[test]
fn unknown_tokens_contribute_to_neither_sum_nor_weight() {
    let tables = ScoringTables {
        words: fractions(&[("free", 1.0)]),
        symbols: ScoringTable::default(),
        subject: ScoringTable::default(),
    };
    // One known token, three unknown: score must stay at the known
    // token's fraction rather than being diluted.
    let msg = message(&[("free", 1), ("quarterly", 3)]);

    let scorer = FrequencyScorer;
    let details = scorer.score(&msg, &tables);
    assert_eq!(details.weight, 1);
    assert!((scorer.score_value(&details) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn score_is_weighted_across_all_three_channels() {
    let tables = ScoringTables {
        words: fractions(&[("winner", 1.0)]),
        symbols: fractions(&[("!", 0.5)]),
        subject: fractions(&[("free", 0.8)]),
    };
    let msg = TokenizedMessage {
        words: word_counts(&[("winner", 2)]),
        symbols: [('!', 2)].into_iter().collect(),
        subject: Some(word_counts(&[("free", 1)])),
    };

    // (1.0*2 + 0.5*2 + 0.8*1) / 5 = 3.8 / 5
    let scorer = FrequencyScorer;
    let details = scorer.score(&msg, &tables);
    assert_eq!(details.weight, 5);
    assert!((scorer.score_value(&details) - 0.76).abs() < 1e-12);
    assert_eq!(scorer.classify(&msg, &tables), Label::Ham);
}

#[test]
fn absent_subject_contributes_nothing() {
    let tables = ScoringTables {
        words: ScoringTable::default(),
        symbols: ScoringTable::default(),
        subject: fractions(&[("free", 1.0)]),
    };
    let msg = message(&[("free", 4)]);

    // "free" is only known to the subject table, and the message has no
    // subject; nothing matches.
    let scorer = FrequencyScorer;
    assert_eq!(scorer.score(&msg, &tables).weight, 0);
    assert_eq!(scorer.classify(&msg, &tables), Label::Ham);
}

#[test]
fn threshold_is_strict() {
    let tables = ScoringTables {
        words: fractions(&[("edge", SPAM_THRESHOLD)]),
        symbols: ScoringTable::default(),
        subject: ScoringTable::default(),
    };
    let msg = message(&[("edge", 1)]);

    // A score exactly at the threshold stays ham; only above flips.
    let scorer = FrequencyScorer;
    assert_eq!(scorer.classify(&msg, &tables), Label::Ham);

    let tables_above = ScoringTables {
        words: fractions(&[("edge", SPAM_THRESHOLD + 0.01)]),
        symbols: ScoringTable::default(),
        subject: ScoringTable::default(),
    };
    assert_eq!(scorer.classify(&msg, &tables_above), Label::Spam);
}
