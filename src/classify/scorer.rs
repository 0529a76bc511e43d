use crate::knowledge::ScoringTables;
use crate::tokenize::TokenizedMessage;
use crate::types::Label;

/// Score above which a message is labeled spam.
pub const SPAM_THRESHOLD: f64 = 0.77;

/// Accumulated scoring components for one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreDetails {
    pub weighted_sum: f64,
    pub weight: u64,
}

pub trait Scorer {
    fn score(&self, message: &TokenizedMessage, tables: &ScoringTables) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f64 {
        let score = if details.weight == 0 {
            0.0
        } else {
            details.weighted_sum / details.weight as f64
        };
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }

    fn classify(&self, message: &TokenizedMessage, tables: &ScoringTables) -> Label {
        if self.score_value(&self.score(message, tables)) > SPAM_THRESHOLD {
            Label::Spam
        } else {
            Label::Ham
        }
    }
}

/// v0: weighted average of known tokens' spam fractions.
///
/// Each token found in its table contributes `fraction * count` to the
/// sum and `count` to the weight; unknown tokens contribute to neither.
/// A message of entirely unknown vocabulary scores 0 and defaults to ham.
#[derive(Default)]
pub struct FrequencyScorer;

impl Scorer for FrequencyScorer {
    fn score(&self, message: &TokenizedMessage, tables: &ScoringTables) -> ScoreDetails {
        let mut details = ScoreDetails::default();

        if let Some(subject) = &message.subject {
            for (token, count) in subject {
                accumulate(&mut details, tables.subject.spam_fraction(token), *count);
            }
        }
        for (symbol, count) in &message.symbols {
            accumulate(
                &mut details,
                tables.symbols.spam_fraction(&symbol.to_string()),
                *count,
            );
        }
        for (token, count) in &message.words {
            accumulate(&mut details, tables.words.spam_fraction(token), *count);
        }

        details
    }
}

fn accumulate(details: &mut ScoreDetails, fraction: Option<f64>, count: u32) {
    if let Some(fraction) = fraction {
        details.weighted_sum += fraction * f64::from(count);
        details.weight += u64::from(count);
    }
}
