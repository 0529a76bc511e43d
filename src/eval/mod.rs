pub mod confusion;
pub mod quality;

pub use confusion::{BinaryConfusionMatrix, EvalError};
pub use quality::{compute_quality_for_corpus, quality_score};
