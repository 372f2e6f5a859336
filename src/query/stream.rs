//! Line-oriented query driver.
//!
//! One query per input line, answered before the next line is read. Output
//! per query is zero or more `"<id> <score>"` lines followed by one blank
//! separator line. An empty line or end of input stops the loop without
//! writing anything further.

use std::io::{BufRead, Read, Seek, Write};

use super::QuerySession;
use crate::error::{QuarryError, Result};
use crate::types::SearchHit;

/// Render one result line. Scores use the shortest round-trip form, so
/// `3.0` prints as `3` and `1.5` as `1.5`.
pub fn format_hit(hit: &SearchHit) -> String {
    format!("{} {}", hit.identifier, hit.score)
}

/// Answer queries from `input` until an empty line or end of stream.
///
/// Returns the number of queries answered. Output is flushed after every
/// query so interactive callers see results immediately.
pub fn run_queries<R, I, W>(
    session: &mut QuerySession<R>,
    input: I,
    mut output: W,
    limit: Option<usize>,
) -> Result<usize>
where
    R: Read + Seek,
    I: BufRead,
    W: Write,
{
    let mut answered = 0;
    for line in input.lines() {
        let line = line.map_err(|source| QuarryError::Io {
            target: "query input".to_string(),
            source,
        })?;
        if line.is_empty() {
            break;
        }

        let hits = session.run_limited(&line, limit)?;
        write_results(&mut output, &hits).map_err(|source| QuarryError::Io {
            target: "query output".to_string(),
            source,
        })?;
        answered += 1;
    }
    Ok(answered)
}

fn write_results<W: Write>(output: &mut W, hits: &[SearchHit]) -> std::io::Result<()> {
    for hit in hits {
        writeln!(output, "{}", format_hit(hit))?;
    }
    writeln!(output)?;
    output.flush()
}
