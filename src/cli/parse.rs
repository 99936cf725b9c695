//! Parse command: JSON export and summary report

use crate::cli::read_checklist;
use crate::models::TallyConfig;
use crate::services::{build_report, items_to_json};
use crate::utils::fs::write_output;
use crate::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct ParseArgs {
    /// Path to the checklist file [default: SYSTEM_TODO.md]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path to write JSON output [default: automation/system_todo.json]
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Path to write markdown report [default: automation/system_todo_report.md]
    #[arg(long)]
    pub report_out: Option<PathBuf>,
}

/// Paths written by a parse run
#[derive(Debug)]
pub struct ParseOutput {
    pub item_count: usize,
    pub json_path: PathBuf,
    pub report_path: PathBuf,
}

pub fn run(args: ParseArgs, config: &TallyConfig) -> Result<()> {
    let output = execute(args, config)?;

    println!(
        "{}",
        format!(
            "Wrote {} items to {}",
            output.item_count,
            output.json_path.display()
        )
        .green()
    );
    println!(
        "{}",
        format!("Wrote report to {}", output.report_path.display()).green()
    );
    Ok(())
}

/// Parse the checklist and write both outputs without printing
pub fn execute(args: ParseArgs, config: &TallyConfig) -> Result<ParseOutput> {
    let input = args.input.unwrap_or_else(|| config.input.clone());
    let json_path = args.json_out.unwrap_or_else(|| config.json_out.clone());
    let report_path = args.report_out.unwrap_or_else(|| config.report_out.clone());

    let items = read_checklist(&input)?;

    let json = items_to_json(&items)?;
    write_output(&json_path, &json)
        .with_context(|| format!("Failed to write JSON output {}", json_path.display()))?;

    let report = build_report(&items);
    write_output(&report_path, &report)
        .with_context(|| format!("Failed to write report {}", report_path.display()))?;

    tracing::info!(
        json = %json_path.display(),
        report = %report_path.display(),
        "wrote parse outputs"
    );

    Ok(ParseOutput {
        item_count: items.len(),
        json_path,
        report_path,
    })
}
