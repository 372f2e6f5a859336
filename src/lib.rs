// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A minimal on-disk inverted index with boolean-AND TF-IDF search.
//!
//! An offline builder turns a document set (identifier to normalized text)
//! into three binary artifacts. A query engine loads the two small ones into
//! memory, seeks into the large one per term, intersects, scores and ranks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  source/     │────▶│  build/      │────▶│  query/      │
//! │ (corpus →    │     │ (ordinals,   │     │ (AND, TF-IDF,│
//! │ DocumentSet) │     │  postings)   │     │  ranking)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     binary/                          │
//! │  posting store · term dictionary · ordinal table     │
//! │  (little-endian int32/int64, varint-prefixed UTF-8)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `verify/` re-reads a written index and checks every layout invariant;
//! `config` names the artifact files inside an index directory.
//!
//! # Usage
//!
//! ```
//! use std::io::Cursor;
//! use quarry::build::build_index;
//! use quarry::query::QuerySession;
//!
//! let built = build_index([("0", "cat dog"), ("1", "dog bird"), ("2", "cat bird")]).unwrap();
//! let mut session =
//!     QuerySession::from_parts(built.identifiers, built.dictionary, Cursor::new(built.postings))
//!         .unwrap();
//!
//! let hits = session.run("cat dog").unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].identifier, "0");
//! assert_eq!(hits[0].score, 3.0);
//! ```

pub mod binary;
pub mod build;
pub mod config;
pub mod error;
pub mod query;
pub mod source;
pub mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use build::{build_index, BuiltIndex, IndexBuilder, IndexManifest};
pub use config::{IndexConfig, IndexPaths};
pub use error::{QuarryError, Result};
pub use query::{run_queries, QuerySession};
pub use source::DocumentSet;
pub use types::{Ordinal, Posting, ScoredDocument, SearchHit, TermEntry};
pub use utils::{normalize, tokenize};
pub use verify::{verify_index, VerificationReport};
