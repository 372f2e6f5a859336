// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quarry command-line interface.
//!
//! Four subcommands: `parse` turns a tagged corpus into a document source
//! file, `build` indexes a document source file, `search` answers queries
//! from stdin, and `inspect` examines (and optionally verifies) an index
//! directory. Artifact file names come from an optional JSON config.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quarry",
    about = "Build and query a minimal on-disk inverted index",
    version
)]
pub struct Cli {
    /// JSON file overriding index artifact names
    #[arg(long, global = true, env = "QUARRY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a DOCNO/TEXT tagged corpus into a document source file
    Parse {
        /// Tagged corpus (XML-like, one <DOC> per document)
        #[arg(short, long)]
        input: PathBuf,

        /// Document source file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Build an index from a document source file
    Build {
        /// Document source file produced by `parse`
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the index artifacts (created if missing)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Answer queries read line by line from stdin
    ///
    /// Each line is one query. Results are written as "<id> <score>" lines,
    /// followed by a blank line. An empty line or end of input stops.
    Search {
        /// Index directory
        #[arg(short, long)]
        index: PathBuf,

        /// Keep at most this many results per query
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show index statistics
    Inspect {
        /// Index directory
        index: PathBuf,

        /// Decode every artifact and check it against the manifest
        #[arg(long)]
        verify: bool,
    },
}
