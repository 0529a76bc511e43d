use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification outcome for a single message.
///
/// The on-disk tokens in label files are `SPAM` and `OK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "SPAM")]
    Spam,
    #[serde(rename = "OK")]
    Ham,
}

/// Mapping from message file name to its label.
///
/// Ground truth is read from `!truth.txt`; predictions are written to
/// `!prediction.txt`.
pub type LabelMap = BTreeMap<String, Label>;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Unrecognized label tag: {0:?}")]
    InvalidLabel(String),
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "SPAM",
            Label::Ham => "OK",
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPAM" => Ok(Label::Spam),
            "OK" => Ok(Label::Ham),
            other => Err(LabelError::InvalidLabel(other.to_string())),
        }
    }
}
