use std::fs;

use mailsift_core::corpus::{read_labels, write_labels, LabelFileError, PREDICTION_FILE, TRUTH_FILE};
use mailsift_core::eval::{compute_quality_for_corpus, quality_score, BinaryConfusionMatrix, EvalError};
use mailsift_core::types::{Label, LabelMap};
use tempfile::tempdir;

fn label_map(pairs: &[(&str, Label)]) -> LabelMap {
    pairs
        .iter()
        .map(|(name, label)| (name.to_string(), *label))
        .collect()
}

#[test]
fn golden_confusion_matrix_counts() {
    let truth = label_map(&[
        ("em1", Label::Spam),
        ("em2", Label::Spam),
        ("em3", Label::Ham),
        ("em4", Label::Ham),
    ]);
    let predictions = label_map(&[
        ("em1", Label::Spam),
        ("em2", Label::Ham),
        ("em3", Label::Ham),
        ("em4", Label::Spam),
    ]);

    let mut matrix = BinaryConfusionMatrix::new();
    matrix.record_all(&truth, &predictions).unwrap();

    assert_eq!(matrix.true_positives, 1);
    assert_eq!(matrix.true_negatives, 1);
    assert_eq!(matrix.false_positives, 1);
    assert_eq!(matrix.false_negatives, 1);

    // quality = (1 + 1) / (1 + 1 + 10*1 + 1) = 2/13
    let quality = quality_score(&matrix).unwrap();
    assert!((quality - 2.0 / 13.0).abs() < f64::EPSILON);
}

#[test]
fn false_positives_dominate_the_penalty() {
    let mut costly = BinaryConfusionMatrix::new();
    costly.update(Label::Ham, Label::Spam);
    costly.update(Label::Spam, Label::Spam);

    let mut mild = BinaryConfusionMatrix::new();
    mild.update(Label::Spam, Label::Ham);
    mild.update(Label::Spam, Label::Spam);

    // One lost legitimate message hurts far more than one missed spam.
    assert!(quality_score(&costly).unwrap() < quality_score(&mild).unwrap());
}

#[test]
fn quality_of_empty_matrix_is_an_error() {
    let matrix = BinaryConfusionMatrix::new();
    assert!(matches!(quality_score(&matrix), Err(EvalError::EmptyCorpus)));
}

#[test]
fn missing_prediction_is_an_error() {
    let truth = label_map(&[("em1", Label::Spam)]);
    let predictions = LabelMap::new();

    let mut matrix = BinaryConfusionMatrix::new();
    let result = matrix.record_all(&truth, &predictions);
    assert!(matches!(result, Err(EvalError::MissingPrediction(name)) if name == "em1"));
}

#[test]
fn label_files_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(TRUTH_FILE);

    let labels = label_map(&[("0001.a", Label::Spam), ("0002.b", Label::Ham)]);
    write_labels(&path, &labels).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "0001.a SPAM\n0002.b OK\n");

    assert_eq!(read_labels(&path).unwrap(), labels);
}

#[test]
fn label_line_without_space_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(TRUTH_FILE);
    fs::write(&path, "0001.a SPAM\nmalformed\n").unwrap();

    let result = read_labels(&path);
    assert!(matches!(
        result,
        Err(LabelFileError::MalformedLine { line: 2, .. })
    ));
}

#[test]
fn unknown_label_tag_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(TRUTH_FILE);
    fs::write(&path, "0001.a SPAMMY\n").unwrap();

    let result = read_labels(&path);
    assert!(matches!(result, Err(LabelFileError::InvalidLabel(_))));
}

#[test]
fn corpus_quality_reads_both_label_files() {
    let dir = tempdir().unwrap();

    let truth = label_map(&[
        ("em1", Label::Spam),
        ("em2", Label::Spam),
        ("em3", Label::Ham),
        ("em4", Label::Ham),
    ]);
    let predictions = label_map(&[
        ("em1", Label::Spam),
        ("em2", Label::Ham),
        ("em3", Label::Ham),
        ("em4", Label::Spam),
    ]);
    write_labels(&dir.path().join(TRUTH_FILE), &truth).unwrap();
    write_labels(&dir.path().join(PREDICTION_FILE), &predictions).unwrap();

    let quality = compute_quality_for_corpus(dir.path()).unwrap();
    assert!((quality - 2.0 / 13.0).abs() < f64::EPSILON);
}
