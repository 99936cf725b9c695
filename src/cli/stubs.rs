//! Stubs command: one stub queue file per configured category

use crate::cli::read_checklist;
use crate::models::TallyConfig;
use crate::services::{build_stub_queues, write_stub_queues};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct StubsArgs {
    /// Path to the checklist file [default: SYSTEM_TODO.md]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output directory for stub queues [default: automation]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn run(args: StubsArgs, config: &TallyConfig) -> Result<()> {
    let out_dir = execute(args, config)?;
    let resolved = std::fs::canonicalize(&out_dir).unwrap_or(out_dir);

    println!(
        "{}",
        format!("Wrote stubs to {}", resolved.display()).green()
    );
    Ok(())
}

/// Build and write every stub queue, returning the output directory
pub fn execute(args: StubsArgs, config: &TallyConfig) -> Result<PathBuf> {
    let input = args.input.unwrap_or_else(|| config.input.clone());
    let out_dir = args.out_dir.unwrap_or_else(|| config.stub_dir.clone());

    let items = read_checklist(&input)?;
    let queues = build_stub_queues(&items, &config.categories);
    let written = write_stub_queues(&out_dir, &queues)?;

    for (queue, path) in queues.iter().zip(&written) {
        tracing::info!(
            category = %queue.name,
            entries = queue.entries.len(),
            path = %path.display(),
            "wrote stub queue"
        );
    }

    Ok(out_dir)
}
