//! Summary command: status counts on the terminal

use crate::cli::read_checklist;
use crate::models::TallyConfig;
use crate::services::ChecklistSummary;
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Path to the checklist file [default: SYSTEM_TODO.md]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

pub fn run(args: SummaryArgs, config: &TallyConfig) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.input.clone());
    let items = read_checklist(&input)?;
    let summary = ChecklistSummary::from_items(&items);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("📋 Checklist summary: {}", input.display()).cyan().bold()
    );
    println!();
    println!("   Total:       {}", summary.total);
    println!("   Complete:    {}", summary.complete.to_string().green());
    println!("   In progress: {}", summary.in_progress.to_string().yellow());
    println!("   Open:        {}", summary.open.to_string().red());

    Ok(())
}
