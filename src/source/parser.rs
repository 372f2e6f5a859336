//! Tagged corpus extraction.
//!
//! Corpora arrive as SGML-ish files where each document carries a
//! `<DOCNO>` identifier followed by a `<TEXT>` body:
//!
//! ```text
//! <DOC>
//! <DOCNO> WSJ870324-0001 </DOCNO>
//! <TEXT> John Blair &amp; Co. is close to an agreement ... </TEXT>
//! </DOC>
//! ```
//!
//! Only those two elements matter. Everything else is skipped.

use tracing::debug;

const DOCNO: &str = "DOCNO";
const TEXT: &str = "TEXT";

/// Extract `(identifier, raw_text)` pairs in corpus order.
///
/// Each `<TEXT>` is paired with the closest preceding `<DOCNO>`. A `<DOCNO>`
/// with no `<TEXT>` before the next `<DOCNO>` (or end of input) is dropped,
/// as is a `<TEXT>` with no identifier. Identifiers are trimmed; text is
/// returned raw for the caller to normalize.
pub fn parse_tagged_corpus(corpus: &str) -> Vec<(String, String)> {
    let mut documents = Vec::new();
    let mut pending_id: Option<String> = None;
    let mut pos = 0;

    while let Some((tag, content, end)) = next_element(corpus, pos) {
        pos = end;
        match tag {
            DOCNO => {
                if let Some(orphan) = pending_id.replace(content.trim().to_string()) {
                    debug!(id = %orphan, "document has no TEXT element; skipping");
                }
            }
            _ => match pending_id.take() {
                Some(id) => documents.push((id, content.to_string())),
                None => debug!(at = end, "TEXT element without DOCNO; skipping"),
            },
        }
    }

    if let Some(orphan) = pending_id {
        debug!(id = %orphan, "document has no TEXT element; skipping");
    }
    documents
}

/// Find the next complete `<DOCNO>` or `<TEXT>` element at or after `from`.
///
/// Returns the tag name, the element content, and the byte offset just past
/// the closing tag. An opening tag with no matching close ends the scan.
fn next_element(corpus: &str, from: usize) -> Option<(&'static str, &str, usize)> {
    let rest = &corpus[from..];
    let docno = rest.find("<DOCNO>").map(|i| (i, DOCNO));
    let text = rest.find("<TEXT>").map(|i| (i, TEXT));

    let (start, tag) = match (docno, text) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let content_start = from + start + tag.len() + 2;
    let close = format!("</{}>", tag);
    let content_len = corpus[content_start..].find(&close)?;
    let content_end = content_start + content_len;
    Some((
        tag,
        &corpus[content_start..content_end],
        content_end + close.len(),
    ))
}
