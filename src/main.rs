// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use quarry::build::run_build;
use quarry::config::IndexConfig;
use quarry::query::{run_queries, QuerySession};
use quarry::source::DocumentSet;
use quarry::verify::{summarize_index, verify_index};

mod cli;
use cli::display::{build_lines, inspect_lines, Painter};
use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr; stdout belongs to query results.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = IndexConfig::load(cli.config.as_deref()).context("failed to load config")?;
    debug!(?config, "resolved index config");

    match cli.command {
        Commands::Parse { input, output } => run_parse(&input, &output),
        Commands::Build { input, output } => {
            let summary = run_build(&input, &output, &config)
                .with_context(|| format!("failed to build index into {}", output.display()))?;
            for line in build_lines(&output, &summary.manifest) {
                eprintln!("{}", line);
            }
            Ok(())
        }
        Commands::Search { index, limit } => {
            let paths = config.paths(&index);
            let mut session = QuerySession::load(&paths)
                .with_context(|| format!("failed to open index {}", index.display()))?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            let answered = run_queries(
                &mut session,
                stdin.lock(),
                BufWriter::new(stdout.lock()),
                limit,
            )
            .context("query loop failed")?;
            debug!(answered, "input exhausted");
            Ok(())
        }
        Commands::Inspect { index, verify } => {
            let paths = config.paths(&index);
            let (summary, report) = if verify {
                let report = verify_index(&paths)
                    .with_context(|| format!("verification of {} failed", index.display()))?;
                (report.summary.clone(), Some(report))
            } else {
                let summary = summarize_index(&paths)
                    .with_context(|| format!("failed to read index {}", index.display()))?;
                (summary, None)
            };

            let painter = Painter::detect();
            for line in inspect_lines(&painter, &index, &summary, report.as_ref()) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn run_parse(input: &Path, output: &Path) -> Result<()> {
    let corpus = fs::read_to_string(input)
        .with_context(|| format!("failed to read corpus {}", input.display()))?;
    let documents = DocumentSet::from_tagged_corpus(&corpus);
    documents
        .write_to(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    eprintln!(
        "✓ parsed {} documents into {}",
        documents.len(),
        output.display()
    );
    Ok(())
}
