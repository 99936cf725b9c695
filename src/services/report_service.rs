//! Report service - Summary counts and the open-items report

use crate::models::{ChecklistItem, ItemStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Item counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub total: usize,
    pub complete: usize,
    pub in_progress: usize,
    pub open: usize,
}

impl ChecklistSummary {
    pub fn from_items(items: &[ChecklistItem]) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            summary.total += 1;
            match item.status {
                ItemStatus::Open => summary.open += 1,
                ItemStatus::Complete => summary.complete += 1,
                ItemStatus::InProgress => summary.in_progress += 1,
            }
            summary
        })
    }
}

/// Group open items by section, substituting "Uncategorized" for an empty path.
///
/// Sections are ordered by key; items keep their encounter order.
pub fn group_open_items(items: &[ChecklistItem]) -> BTreeMap<&str, Vec<&ChecklistItem>> {
    let mut grouped: BTreeMap<&str, Vec<&ChecklistItem>> = BTreeMap::new();
    for item in items.iter().filter(|item| item.status.is_open()) {
        grouped
            .entry(item.section_or_default())
            .or_default()
            .push(item);
    }
    grouped
}

/// Render the summary report for a parsed checklist
pub fn build_report(items: &[ChecklistItem]) -> String {
    let summary = ChecklistSummary::from_items(items);
    let mut content = String::new();

    content.push_str("# System TODO Automation Report\n\n");

    content.push_str("## Summary\n");
    content.push_str(&format!("- Total checklist items: {}\n", summary.total));
    content.push_str(&format!("- Complete: {}\n", summary.complete));
    content.push_str(&format!("- In progress: {}\n", summary.in_progress));
    content.push_str(&format!("- Open: {}\n\n", summary.open));

    content.push_str("## Open Items by Section\n\n");

    for (section, section_items) in group_open_items(items) {
        content.push_str(&format!("### {}\n", section));
        for item in section_items {
            content.push_str(&format!("- {} (line {})\n", item.text, item.line_number));
        }
        content.push('\n');
    }

    let mut report = content.trim_end().to_string();
    report.push('\n');
    report
}
