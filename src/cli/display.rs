// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for `quarry inspect` and the build summary.
//!
//! Colors only when stdout is a terminal and `NO_COLOR` is unset. Query
//! results never pass through here: `search` output is a wire format and
//! stays plain.

use std::io::IsTerminal;
use std::path::Path;

use quarry::build::IndexManifest;
use quarry::verify::{IndexSummary, ManifestStatus, VerificationReport};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Renders box lines, optionally with ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    colors: bool,
}

impl Painter {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub fn detect() -> Self {
        Self::new(use_colors())
    }

    fn paint(&self, styles: &[&str], text: &str) -> String {
        if self.colors {
            format!("{}{}{}", styles.concat(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// ┌─ LABEL ──────────┐
    pub fn section_top(&self, label: &str) -> String {
        let label_part = format!("─ {} ", label);
        let remaining = BOX_WIDTH.saturating_sub(label_part.chars().count());
        format!(
            "┌─ {} {}┐",
            self.paint(&[BOLD, CYAN], label),
            "─".repeat(remaining)
        )
    }

    /// │ key          value │
    pub fn row(&self, key: &str, value: &str) -> String {
        let used = key.chars().count() + visible_len(value) + 2;
        let pad = BOX_WIDTH.saturating_sub(used);
        format!(
            "│ {}{}{} │",
            self.paint(&[DIM], key),
            " ".repeat(pad),
            value
        )
    }

    /// └──────────────────┘
    pub fn section_bot(&self) -> String {
        format!("└{}┘", "─".repeat(BOX_WIDTH))
    }

    pub fn ok(&self, text: &str) -> String {
        self.paint(&[GREEN], text)
    }

    pub fn note(&self, text: &str) -> String {
        self.paint(&[YELLOW], text)
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Lines printed by `quarry inspect`.
pub fn inspect_lines(
    painter: &Painter,
    dir: &Path,
    summary: &IndexSummary,
    report: Option<&VerificationReport>,
) -> Vec<String> {
    let mut lines = vec![
        painter.section_top("INDEX"),
        painter.row("directory", &dir.display().to_string()),
        painter.row("documents", &summary.document_count.to_string()),
        painter.row("terms", &summary.term_count.to_string()),
        painter.row("postings", &summary.posting_count.to_string()),
        painter.section_top("ARTIFACTS"),
        painter.row("posting store", &format_size(summary.postings_bytes)),
        painter.row("term dictionary", &format_size(summary.dictionary_bytes)),
        painter.row("ordinal table", &format_size(summary.ordinals_bytes)),
    ];

    if let Some(report) = report {
        lines.push(painter.section_top("VERIFY"));
        lines.push(painter.row("layout", &painter.ok("ok")));
        let manifest = match report.manifest {
            ManifestStatus::Verified => painter.ok("ok"),
            ManifestStatus::Absent => painter.note("absent"),
        };
        lines.push(painter.row("manifest", &manifest));
    }

    lines.push(painter.section_bot());
    lines
}

/// Progress lines printed to stderr after `quarry build`.
pub fn build_lines(dir: &Path, manifest: &IndexManifest) -> Vec<String> {
    vec![
        format!(
            "✓ indexed {} documents, {} terms, {} postings",
            manifest.document_count, manifest.term_count, manifest.posting_count
        ),
        format!(
            "✓ wrote {} ({}), {} ({}), {} ({}) to {}",
            manifest.postings.file,
            format_size(manifest.postings.bytes),
            manifest.dictionary.file,
            format_size(manifest.dictionary.bytes),
            manifest.ordinals.file,
            format_size(manifest.ordinals.bytes),
            dir.display()
        ),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
