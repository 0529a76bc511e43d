use std::path::Path;

use crate::corpus::{read_labels, PREDICTION_FILE, TRUTH_FILE};
use crate::eval::confusion::{BinaryConfusionMatrix, EvalError};

/// False-positive-weighted accuracy:
/// `(tp + tn) / (tp + tn + 10*fp + fn)`.
///
/// Losing a legitimate message costs ten times a missed spam. Undefined
/// over an empty matrix; callers must not evaluate an empty corpus.
pub fn quality_score(matrix: &BinaryConfusionMatrix) -> Result<f64, EvalError> {
    if matrix.total() == 0 {
        return Err(EvalError::EmptyCorpus);
    }

    let hits = (matrix.true_positives + matrix.true_negatives) as f64;
    let denominator =
        hits + 10.0 * matrix.false_positives as f64 + matrix.false_negatives as f64;
    Ok(hits / denominator)
}

/// Grade a finished classifier run: compare the corpus's `!truth.txt`
/// against its `!prediction.txt`.
pub fn compute_quality_for_corpus(corpus_dir: &Path) -> Result<f64, EvalError> {
    let truth = read_labels(&corpus_dir.join(TRUTH_FILE))?;
    let predictions = read_labels(&corpus_dir.join(PREDICTION_FILE))?;

    let mut matrix = BinaryConfusionMatrix::new();
    matrix.record_all(&truth, &predictions)?;
    quality_score(&matrix)
}
