//! Command implementations for the `tally` binary
//!
//! Each command resolves its paths (flag, then config, then default), reads
//! the checklist, delegates rendering to the service layer and writes results.

pub mod init;
pub mod parse;
pub mod stubs;
pub mod summary;

use crate::models::ChecklistItem;
use crate::parser::extract_str;
use crate::{Context, Result};
use std::path::Path;

/// Read and extract a checklist file
pub fn read_checklist(path: &Path) -> Result<Vec<ChecklistItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read checklist {}", path.display()))?;
    let items = extract_str(&content);
    tracing::info!(path = %path.display(), items = items.len(), "parsed checklist");
    Ok(items)
}
