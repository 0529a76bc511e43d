pub mod counter;
pub mod filters;

pub use counter::{count_subject_words, count_symbols, count_words, normalize_word};
pub use filters::{filter_tokens, is_informative};

use std::collections::BTreeMap;

use crate::message::{parse_headers, strip_headers, strip_html};

/// Token counts extracted from one raw message, ready for merging into
/// knowledge tables or for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizedMessage {
    pub words: BTreeMap<String, u32>,
    pub symbols: BTreeMap<char, u32>,
    /// `None` when the message carries no `Subject` header.
    pub subject: Option<BTreeMap<String, u32>>,
}

impl TokenizedMessage {
    /// Run the full text pipeline on a raw message: headers off, HTML off,
    /// words counted and filtered, symbols counted, subject words counted
    /// and filtered when a subject is present.
    pub fn from_raw(raw: &str) -> Self {
        let headers = parse_headers(raw);
        let body = strip_html(strip_headers(raw));

        let words = filter_tokens(count_words(&body));
        let symbols = count_symbols(&body);
        let subject = headers
            .get("Subject")
            .map(|s| filter_tokens(count_subject_words(s)));

        TokenizedMessage {
            words,
            symbols,
            subject,
        }
    }
}
