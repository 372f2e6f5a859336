// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for building and querying an index.
//!
//! Every failure here is fatal for the run that hit it. Unknown query terms
//! and empty intersections are not errors at all, so they have no variant.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::binary::Artifact;

/// Main error type for quarry operations
#[derive(Error, Debug)]
pub enum QuarryError {
    /// Something could not be created, written, or read at the OS level.
    #[error("I/O failure on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },

    /// One of the index artifacts is not there (or not readable) at load time.
    #[error("index file {} could not be opened: {source}", path.display())]
    MissingIndexFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A length prefix, count, or fixed record does not decode cleanly.
    #[error("corrupt {artifact}: {detail}")]
    CorruptRecord { artifact: Artifact, detail: String },

    /// A value does not fit the fixed-width field it is stored in.
    #[error("{what} {value} exceeds the on-disk limit of {max}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        max: u64,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("manifest mismatch: {0}")]
    Manifest(String),
}

/// Result type alias for quarry operations
pub type Result<T> = std::result::Result<T, QuarryError>;

impl QuarryError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        QuarryError::Io {
            target: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn corrupt(artifact: Artifact, detail: impl Into<String>) -> Self {
        QuarryError::CorruptRecord {
            artifact,
            detail: detail.into(),
        }
    }

    /// Wrap a codec error. Decoders only ever report malformed input, so any
    /// error coming out of them is a corrupt record for that artifact.
    pub(crate) fn decode(artifact: Artifact, err: io::Error) -> Self {
        QuarryError::corrupt(artifact, err.to_string())
    }

    /// True for errors caused by bad bytes on disk rather than the environment.
    pub fn is_corruption(&self) -> bool {
        matches!(self, QuarryError::CorruptRecord { .. })
    }
}
