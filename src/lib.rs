// Tally - Checklist automation for markdown TODO files
// Extracts checkbox items, builds summary reports and keyword-driven stub queues

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
pub mod utils;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{ChecklistItem, ItemStatus, StubCategory, TallyConfig};
pub use parser::{extract, extract_str};
pub use services::{build_report, build_stub_queues, ChecklistSummary, StubQueue};
