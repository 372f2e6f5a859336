// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index layout configuration.
//!
//! An index lives in one directory. The config only names the files inside
//! it; every field has a default, so an empty JSON object is a valid config.
//!
//! ```json
//! { "postingsFile": "postings.bin", "dictionaryFile": "terms.bin" }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuarryError, Result};

pub const DEFAULT_POSTINGS_FILE: &str = "postings.bin";
pub const DEFAULT_DICTIONARY_FILE: &str = "terms.bin";
pub const DEFAULT_ORDINALS_FILE: &str = "doc_ids.bin";
pub const DEFAULT_MANIFEST_FILE: &str = "manifest.json";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexConfig {
    pub postings_file: String,
    pub dictionary_file: String,
    pub ordinals_file: String,
    pub manifest_file: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            postings_file: DEFAULT_POSTINGS_FILE.to_string(),
            dictionary_file: DEFAULT_DICTIONARY_FILE.to_string(),
            ordinals_file: DEFAULT_ORDINALS_FILE.to_string(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
        }
    }
}

impl IndexConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: IndexConfig =
            serde_json::from_str(json).map_err(|e| QuarryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| QuarryError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// File names must be plain, non-empty, and distinct.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("postingsFile", &self.postings_file),
            ("dictionaryFile", &self.dictionary_file),
            ("ordinalsFile", &self.ordinals_file),
            ("manifestFile", &self.manifest_file),
        ];

        let mut seen = HashSet::new();
        for (key, name) in names {
            if name.trim().is_empty() {
                return Err(QuarryError::Config(format!("{} must not be empty", key)));
            }
            let mut components = Path::new(name).components();
            let plain = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
            if !plain {
                return Err(QuarryError::Config(format!(
                    "{} must be a file name, got {:?}",
                    key, name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(QuarryError::Config(format!(
                    "{} reuses file name {:?}",
                    key, name
                )));
            }
        }
        Ok(())
    }

    /// Resolve the artifact locations inside an index directory.
    pub fn paths(&self, dir: &Path) -> IndexPaths {
        IndexPaths {
            postings: dir.join(&self.postings_file),
            dictionary: dir.join(&self.dictionary_file),
            ordinals: dir.join(&self.ordinals_file),
            manifest: dir.join(&self.manifest_file),
        }
    }
}

/// Resolved artifact locations for one index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexPaths {
    pub postings: PathBuf,
    pub dictionary: PathBuf,
    pub ordinals: PathBuf,
    pub manifest: PathBuf,
}

impl IndexPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        IndexConfig::default().paths(dir)
    }
}
