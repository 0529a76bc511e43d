use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::{LabelError, LabelMap};

/// Ground-truth label file, one `<filename> <label>` line per message.
pub const TRUTH_FILE: &str = "!truth.txt";
/// Prediction label file written after a scoring run.
pub const PREDICTION_FILE: &str = "!prediction.txt";

#[derive(Debug, Error)]
pub enum LabelFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed label line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error(transparent)]
    InvalidLabel(#[from] LabelError),
}

/// Read a label file. Each line splits on the first space only; file
/// names may not contain spaces. A line with no space or an unrecognized
/// tag is an error; classification correctness depends on ground truth,
/// so nothing is recovered silently.
pub fn read_labels(path: &Path) -> Result<LabelMap, LabelFileError> {
    let text = fs::read_to_string(path)?;
    let mut labels = LabelMap::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        let (name, tag) = line
            .split_once(' ')
            .ok_or_else(|| LabelFileError::MalformedLine {
                line: idx + 1,
                text: line.to_string(),
            })?;
        labels.insert(name.to_string(), tag.parse()?);
    }

    Ok(labels)
}

/// Write a label file in the same `<filename> <label>` format.
pub fn write_labels(path: &Path, labels: &LabelMap) -> Result<(), LabelFileError> {
    let mut out = String::new();
    for (name, label) in labels {
        out.push_str(name);
        out.push(' ');
        out.push_str(label.as_str());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}
