pub mod scorer;
pub mod strategies;

pub use scorer::{FrequencyScorer, ScoreDetails, Scorer, SPAM_THRESHOLD};
pub use strategies::{
    AllHamClassifier, AllSpamClassifier, Classifier, ClassifyError, FrequencyClassifier,
    RandomClassifier,
};
