use std::collections::BTreeMap;

/// Tokens longer than this carry no usable signal.
const MAX_TOKEN_LEN: usize = 25;

/// Characters that make a token "too symbolic" when any single one of
/// them occurs more than twice in it.
const SYMBOLIC_CHARS: &[char] = &[
    '-', '_', '+', '*', '/', ',', '\'', '"', '.', ':', '!', '?', '(', ')', '[', ']', '{', '}',
    '|', '~',
];

/// Common English words that appear in spam and ham alike. Matched
/// case-sensitively against normalized tokens.
const NEUTRAL_WORDS: &[&str] = &[
    "the", "of", "to", "and", "a", "in", "is", "it", "you", "that", "he", "was", "for", "on",
    "are", "with", "as", "I", "his", "they", "be", "at", "one", "have", "this", "from", "or",
    "had", "by", "not", "word", "but", "what", "some", "we", "can", "out", "other", "were",
    "all", "there", "when", "up", "use", "your", "how", "said", "an", "each", "she", "which",
    "do", "their", "time", "if", "will", "way", "about", "many", "then", "them", "write",
    "would", "like", "so", "these", "her", "long", "make", "thing", "see", "him", "two", "has",
    "look", "more", "day", "could", "go", "come", "did", "number", "sound", "no", "most",
    "people", "my", "over", "know", "water", "than", "call", "first", "who", "may", "down",
    "side", "been", "now", "find",
];

fn is_neutral_word(token: &str) -> bool {
    NEUTRAL_WORDS.contains(&token)
}

fn too_many_symbols(token: &str) -> bool {
    SYMBOLIC_CHARS
        .iter()
        .any(|s| token.chars().filter(|c| c == s).count() > 2)
}

fn is_integer(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

/// Whether a normalized token carries enough signal to be worth tracking.
///
/// Rejects empty and over-long tokens, neutral words, tokens dominated by
/// a repeated punctuation character, anything containing `http`, and plain
/// integers.
pub fn is_informative(token: &str) -> bool {
    !token.is_empty()
        && token.chars().count() <= MAX_TOKEN_LEN
        && !is_neutral_word(token)
        && !too_many_symbols(token)
        && !token.to_lowercase().contains("http")
        && !is_integer(token)
}

/// Drop uninformative tokens from a word-count map.
///
/// Applied to word and subject-word maps before merging; never to symbol
/// maps.
pub fn filter_tokens(counts: BTreeMap<String, u32>) -> BTreeMap<String, u32> {
    counts
        .into_iter()
        .filter(|(token, _)| is_informative(token))
        .collect()
}
