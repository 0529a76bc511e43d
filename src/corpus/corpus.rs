use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A directory of raw email files.
///
/// File names starting with `!` are reserved for metadata (truth and
/// prediction label files) and are never treated as messages. Iteration
/// is in sorted name order so every pass over a corpus is deterministic.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted message file names, metadata excluded.
    pub fn message_names(&self) -> Result<Vec<String>, io::Error> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with('!') {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Iterate `(file_name, raw_text)` pairs in name order.
    pub fn messages(&self) -> Result<Messages<'_>, io::Error> {
        Ok(Messages {
            root: &self.root,
            names: self.message_names()?.into_iter(),
        })
    }
}

pub struct Messages<'a> {
    root: &'a Path,
    names: std::vec::IntoIter<String>,
}

impl Iterator for Messages<'_> {
    type Item = Result<(String, String), io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        Some(fs::read_to_string(self.root.join(&name)).map(|raw| (name, raw)))
    }
}
