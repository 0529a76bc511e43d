use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::LabelFileError;
use crate::types::{Label, LabelMap};

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("No prediction recorded for message {0:?}")]
    MissingPrediction(String),
    #[error("Quality score is undefined over an empty corpus")]
    EmptyCorpus,
    #[error(transparent)]
    Labels(#[from] LabelFileError),
}

/// Binary confusion matrix over spam/ham outcomes. Spam is the positive
/// class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfusionMatrix {
    pub true_positives: u64,
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl BinaryConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one truth/prediction pair.
    pub fn update(&mut self, truth: Label, prediction: Label) {
        match (truth, prediction) {
            (Label::Spam, Label::Spam) => self.true_positives += 1,
            (Label::Ham, Label::Ham) => self.true_negatives += 1,
            (Label::Ham, Label::Spam) => self.false_positives += 1,
            (Label::Spam, Label::Ham) => self.false_negatives += 1,
        }
    }

    /// Record every truth entry against the prediction map. A truth key
    /// with no prediction is an error: the maps must cover the same
    /// corpus.
    pub fn record_all(
        &mut self,
        truth: &LabelMap,
        predictions: &LabelMap,
    ) -> Result<(), EvalError> {
        for (name, truth_label) in truth {
            let prediction = predictions
                .get(name)
                .ok_or_else(|| EvalError::MissingPrediction(name.clone()))?;
            self.update(*truth_label, *prediction);
        }
        Ok(())
    }

    pub fn total(&self) -> u64 {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }
}
