//! Shared proptest strategies.

use proptest::prelude::*;

/// Words from a small vocabulary so that terms collide across documents.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "alpha", "beta", "gamma", "delta", "omega", "sigma", "tau", "rho",
    ])
    .prop_map(str::to_string)
}

/// Document text: zero or more words separated by single spaces.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..8).prop_map(|words| words.join(" "))
}

/// A corpus with unique identifiers `d0..dN` in order.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(text_strategy(), 1..12).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| (format!("d{}", i), text))
            .collect()
    })
}

/// A query of one to four words, possibly with unknown ones.
pub fn query_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            4 => word_strategy(),
            1 => Just("unknown".to_string()),
        ],
        1..5,
    )
}

pub fn as_refs(corpus: &[(String, String)]) -> Vec<(&str, &str)> {
    corpus.iter().map(|(id, text)| (id.as_str(), text.as_str())).collect()
}

/// Occurrences of `term` in `text`.
pub fn count(text: &str, term: &str) -> u32 {
    text.split_whitespace().filter(|w| *w == term).count() as u32
}
