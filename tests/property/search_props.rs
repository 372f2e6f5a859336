//! Properties of query answers.

use std::collections::BTreeSet;
use std::io::Cursor;

use proptest::prelude::*;
use quarry::build::build_index;
use quarry::query::QuerySession;

use crate::strategies::{as_refs, corpus_strategy, count, query_strategy};

fn session(corpus: &[(String, String)]) -> QuerySession<Cursor<Vec<u8>>> {
    let built = build_index(as_refs(corpus)).unwrap();
    QuerySession::from_parts(built.identifiers, built.dictionary, Cursor::new(built.postings))
        .unwrap()
}

/// Terms of `query` that occur anywhere in the corpus.
fn present_terms<'a>(corpus: &[(String, String)], query: &'a [String]) -> Vec<&'a str> {
    query
        .iter()
        .map(String::as_str)
        .filter(|t| corpus.iter().any(|(_, text)| count(text, t) > 0))
        .collect()
}

fn document_frequency(corpus: &[(String, String)], term: &str) -> usize {
    corpus.iter().filter(|(_, text)| count(text, term) > 0).count()
}

proptest! {
    /// Matches are exactly the documents containing every present term.
    #[test]
    fn prop_boolean_and(corpus in corpus_strategy(), query in query_strategy()) {
        let mut s = session(&corpus);
        let hits = s.run(&query.join(" ")).unwrap();
        let got: BTreeSet<String> = hits.into_iter().map(|h| h.identifier).collect();

        let present = present_terms(&corpus, &query);
        let expected: BTreeSet<String> = if present.is_empty() {
            BTreeSet::new()
        } else {
            corpus
                .iter()
                .filter(|(_, text)| present.iter().all(|t| count(text, t) > 0))
                .map(|(id, _)| id.clone())
                .collect()
        };
        prop_assert_eq!(got, expected);
    }

    /// Score is the sum of tf * N / df over query term occurrences.
    #[test]
    fn prop_score_formula(corpus in corpus_strategy(), query in query_strategy()) {
        let mut s = session(&corpus);
        let total = corpus.len() as f64;
        let present = present_terms(&corpus, &query);

        for hit in s.run(&query.join(" ")).unwrap() {
            let (_, text) = corpus.iter().find(|(id, _)| *id == hit.identifier).unwrap();
            let expected: f64 = present
                .iter()
                .map(|t| {
                    f64::from(count(text, t)) * (total / document_frequency(&corpus, t) as f64)
                })
                .sum();
            prop_assert!((hit.score - expected).abs() < 1e-9, "{} vs {}", hit.score, expected);
        }
    }

    /// Scores never increase down the list; ties keep ordinal order.
    #[test]
    fn prop_ranking_order(corpus in corpus_strategy(), query in query_strategy()) {
        let mut s = session(&corpus);
        let hits = s.run(&query.join(" ")).unwrap();
        let ordinal = |id: &str| corpus.iter().position(|(d, _)| d == id).unwrap();

        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(ordinal(&pair[0].identifier) < ordinal(&pair[1].identifier));
            }
        }
    }

    /// A limit returns a prefix of the full ranking.
    #[test]
    fn prop_limit_is_prefix(corpus in corpus_strategy(), query in query_strategy(), limit in 0usize..6) {
        let mut s = session(&corpus);
        let line = query.join(" ");
        let full = s.run(&line).unwrap();
        let limited = s.run_limited(&line, Some(limit)).unwrap();
        prop_assert_eq!(&limited[..], &full[..limit.min(full.len())]);
    }
}
