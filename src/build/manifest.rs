//! Index manifest: a JSON summary written next to the artifacts.
//!
//! The query engine never reads it. It exists so `quarry inspect --verify`
//! can tell a truncated or swapped artifact from a healthy one without
//! trusting the artifacts themselves.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::BuiltIndex;
use crate::binary::write_file;
use crate::config::IndexPaths;
use crate::error::{QuarryError, Result};

/// Bumped whenever the artifact layout changes.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexManifest {
    pub version: u32,
    pub document_count: usize,
    pub term_count: usize,
    pub posting_count: usize,
    pub postings: ArtifactInfo,
    pub dictionary: ArtifactInfo,
    pub ordinals: ArtifactInfo,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactInfo {
    pub file: String,
    pub bytes: u64,
    pub crc32: u32,
}

impl ArtifactInfo {
    pub fn describe(path: &Path, bytes: &[u8]) -> Self {
        Self {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            bytes: bytes.len() as u64,
            crc32: crc32fast::hash(bytes),
        }
    }

    /// Check that `bytes` are exactly what this entry recorded.
    pub fn verify(&self, bytes: &[u8]) -> Result<()> {
        if bytes.len() as u64 != self.bytes {
            return Err(QuarryError::Manifest(format!(
                "{} is {} bytes, manifest says {}",
                self.file,
                bytes.len(),
                self.bytes
            )));
        }
        let actual = crc32fast::hash(bytes);
        if actual != self.crc32 {
            return Err(QuarryError::Manifest(format!(
                "{} checksum {:08x} does not match manifest {:08x}",
                self.file, actual, self.crc32
            )));
        }
        Ok(())
    }
}

impl IndexManifest {
    pub(crate) fn describe(
        index: &BuiltIndex,
        paths: &IndexPaths,
        dictionary: &[u8],
        ordinals: &[u8],
    ) -> Self {
        Self {
            version: MANIFEST_VERSION,
            document_count: index.document_count(),
            term_count: index.term_count(),
            posting_count: index.posting_count(),
            postings: ArtifactInfo::describe(&paths.postings, &index.postings),
            dictionary: ArtifactInfo::describe(&paths.dictionary, dictionary),
            ordinals: ArtifactInfo::describe(&paths.ordinals, ordinals),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| QuarryError::io(path, e))?;
        let manifest: IndexManifest = serde_json::from_str(&content)
            .map_err(|e| QuarryError::Manifest(format!("{}: {}", path.display(), e)))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(QuarryError::Manifest(format!(
                "unsupported manifest version {} (expected {})",
                manifest.version, MANIFEST_VERSION
            )));
        }
        Ok(manifest)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QuarryError::Manifest(e.to_string()))?;
        write_file(path, json.as_bytes())
    }
}
