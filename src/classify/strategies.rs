use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::classify::scorer::{FrequencyScorer, Scorer};
use crate::corpus::{read_labels, write_labels, Corpus, LabelFileError, PREDICTION_FILE, TRUTH_FILE};
use crate::knowledge::{KnowledgeError, KnowledgeStore, SnapshotConfig};
use crate::tokenize::TokenizedMessage;
use crate::types::{Label, LabelMap};

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Labels(#[from] LabelFileError),
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

/// A classification strategy over a labeled email corpus.
///
/// `train` accumulates evidence from a corpus with a `!truth.txt` file;
/// baseline strategies learn nothing. `test` is read-only and predicts a
/// label for every message in the corpus.
pub trait Classifier {
    fn train(&mut self, corpus_dir: &Path) -> Result<(), ClassifyError> {
        let _ = corpus_dir;
        Ok(())
    }

    fn test(&self, corpus_dir: &Path) -> Result<LabelMap, ClassifyError>;

    /// Run `test` and record the predictions in the corpus's
    /// `!prediction.txt`.
    fn test_and_record(&self, corpus_dir: &Path) -> Result<LabelMap, ClassifyError> {
        let predictions = self.test(corpus_dir)?;
        write_labels(&corpus_dir.join(PREDICTION_FILE), &predictions)?;
        Ok(predictions)
    }
}

fn mark_all(
    corpus_dir: &Path,
    mut label_for: impl FnMut(&str) -> Label,
) -> Result<LabelMap, ClassifyError> {
    let corpus = Corpus::new(corpus_dir);
    let mut predictions = LabelMap::new();
    for name in corpus.message_names()? {
        let label = label_for(&name);
        predictions.insert(name, label);
    }
    Ok(predictions)
}

/// Baseline: marks every message ham.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllHamClassifier;

impl Classifier for AllHamClassifier {
    fn test(&self, corpus_dir: &Path) -> Result<LabelMap, ClassifyError> {
        mark_all(corpus_dir, |_| Label::Ham)
    }
}

/// Baseline: marks every message spam.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllSpamClassifier;

impl Classifier for AllSpamClassifier {
    fn test(&self, corpus_dir: &Path) -> Result<LabelMap, ClassifyError> {
        mark_all(corpus_dir, |_| Label::Spam)
    }
}

/// Baseline: flips a coin per message.
///
/// The random source is injected at construction so test runs can seed it
/// and stay reproducible.
#[derive(Debug)]
pub struct RandomClassifier<R> {
    rng: RefCell<R>,
}

impl<R: Rng> RandomClassifier<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl<R: Rng> Classifier for RandomClassifier<R> {
    fn test(&self, corpus_dir: &Path) -> Result<LabelMap, ClassifyError> {
        let mut rng = self.rng.borrow_mut();
        mark_all(corpus_dir, |_| {
            if rng.gen::<bool>() {
                Label::Spam
            } else {
                Label::Ham
            }
        })
    }
}

/// Token-frequency classifier backed by a persisted knowledge snapshot.
///
/// Training merges each truth-listed message's token counts into the
/// snapshot's tables, prunes the word table, and writes the snapshot
/// back. Testing loads the fraction-only projection and scores every
/// message against [`super::scorer::SPAM_THRESHOLD`].
#[derive(Debug)]
pub struct FrequencyClassifier {
    knowledge_dir: PathBuf,
    config: SnapshotConfig,
}

impl FrequencyClassifier {
    pub fn new(knowledge_dir: impl Into<PathBuf>) -> Self {
        Self {
            knowledge_dir: knowledge_dir.into(),
            config: SnapshotConfig::v0(),
        }
    }

    pub fn knowledge_dir(&self) -> &Path {
        &self.knowledge_dir
    }
}

impl Classifier for FrequencyClassifier {
    fn train(&mut self, corpus_dir: &Path) -> Result<(), ClassifyError> {
        let mut store = KnowledgeStore::load(&self.knowledge_dir)?;
        let truth = read_labels(&corpus_dir.join(TRUTH_FILE))?;
        info!(corpus = %corpus_dir.display(), messages = truth.len(), "training pass");

        for (name, label) in &truth {
            let raw = fs::read_to_string(corpus_dir.join(name))?;
            let message = TokenizedMessage::from_raw(&raw);
            store.absorb(&message, *label);
            debug!(message = %name, label = %label, "merged");
        }

        store.words.retain_brutal();
        store.save(&self.knowledge_dir, self.config.clone())?;
        Ok(())
    }

    fn test(&self, corpus_dir: &Path) -> Result<LabelMap, ClassifyError> {
        let tables = KnowledgeStore::load_scoring(&self.knowledge_dir)?;
        let scorer = FrequencyScorer;

        let mut predictions = LabelMap::new();
        for entry in Corpus::new(corpus_dir).messages()? {
            let (name, raw) = entry?;
            let message = TokenizedMessage::from_raw(&raw);
            predictions.insert(name, scorer.classify(&message, &tables));
        }

        info!(corpus = %corpus_dir.display(), messages = predictions.len(), "scoring pass");
        Ok(predictions)
    }
}
