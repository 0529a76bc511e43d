pub mod corpus;
pub mod labels;

pub use corpus::{Corpus, Messages};
pub use labels::{read_labels, write_labels, LabelFileError, PREDICTION_FILE, TRUTH_FILE};
