use std::collections::BTreeMap;

/// Characters removed from words during normalization.
const STRIPPED_PUNCTUATION: &[char] = &[
    '-', '+', '*', '/', ',', '\'', '"', '.', ':', '!', '?', '(', ')', '[', ']', '{', '}', '|',
    '=', '#', '$', '>', '<',
];

/// Characters tallied by [`count_symbols`].
pub const SPECIAL_SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '[', ']', '{', '}', '|', '>', '<',
];

/// Strip the fixed punctuation set from a whitespace-delimited word and
/// lowercase what remains. Can produce an empty token.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Count normalized words in body text. Words that normalize to the same
/// token are merged.
pub fn count_words(body: &str) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for word in body.split_whitespace() {
        *counts.entry(normalize_word(word)).or_insert(0) += 1;
    }
    counts
}

/// Count special-symbol occurrences over the raw body, unnormalized.
pub fn count_symbols(body: &str) -> BTreeMap<char, u32> {
    let mut counts = BTreeMap::new();
    for c in body.chars() {
        if SPECIAL_SYMBOLS.contains(&c) {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    counts
}

/// Count normalized words in a subject line. Same normalization as body
/// words, applied to the whole line before splitting, so punctuation-only
/// words vanish instead of counting as empty tokens.
pub fn count_subject_words(subject: &str) -> BTreeMap<String, u32> {
    count_words(&normalize_word(subject))
}
