//! Integration tests for the checklist pipeline
//!
//! Covers the full flow from a markdown TODO file to:
//! - extracted items and their section paths
//! - the summary report
//! - stub queues written to disk

use std::fs;
use tally::models::{ItemStatus, StubCategory, TallyConfig};
use tally::services::{build_report, build_stub_queues, items_to_json, write_stub_queues, ChecklistSummary};
use tally::{extract, extract_str};
use tempfile::TempDir;

const SYSTEM_TODO: &str = r#"# System TODO

Intro paragraph that mentions a diagram but is not a checkbox.

## Foundations
- [x] Pick storage engine
- [ ] Add ERD diagram for schema
- [~] Draft onboarding flowchart

### Runbooks
- [ ] Write on-call playbook
- [ ] Document release steps

Example of the format used in this file:

```markdown
## Fake Section
- [ ] fake item inside a fence
```

## Narrative
- [ ] Outline chapter one
- [?] unknown status is ignored
  - [ ] indented items are ignored
- [ ] Sequence diagram for playback
"#;

#[test]
fn test_spec_example_statuses_and_lines() {
    let items = extract(["## Setup", "- [ ] write spec", "- [x] done task", "- [~] in flight"]);

    let statuses: Vec<ItemStatus> = items.iter().map(|i| i.status).collect();
    assert_eq!(
        statuses,
        vec![ItemStatus::Open, ItemStatus::Complete, ItemStatus::InProgress]
    );
    assert!(items.iter().all(|i| i.section_path == "Setup"));
    let lines: Vec<usize> = items.iter().map(|i| i.line_number).collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn test_fenced_block_produces_no_items() {
    let items = extract(["```", "- [ ] fake item", "```"]);
    assert!(items.is_empty());
}

#[test]
fn test_heading_scope_example() {
    let items = extract(["## A", "### B", "## C", "- [ ] item"]);
    assert_eq!(items[0].section_path, "C");
}

#[test]
fn test_full_document_extraction() {
    let items = extract_str(SYSTEM_TODO);

    let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Pick storage engine",
            "Add ERD diagram for schema",
            "Draft onboarding flowchart",
            "Write on-call playbook",
            "Document release steps",
            "Outline chapter one",
            "Sequence diagram for playback",
        ]
    );

    assert_eq!(items[3].section_path, "Foundations > Runbooks");
    assert_eq!(items[5].section_path, "Narrative");
    assert!(!texts.iter().any(|t| t.contains("fake")));
}

#[test]
fn test_item_count_matches_unfenced_checkbox_lines() {
    let mut in_fence = false;
    let mut expected = 0;
    for line in SYSTEM_TODO.lines() {
        if line.trim().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence && tally::parser::match_checkbox(line).is_some() {
            expected += 1;
        }
    }

    assert_eq!(extract_str(SYSTEM_TODO).len(), expected);
}

#[test]
fn test_status_partition() {
    let items = extract_str(SYSTEM_TODO);
    let summary = ChecklistSummary::from_items(&items);
    let open = items.iter().filter(|i| i.status == ItemStatus::Open).count();

    assert_eq!(summary.complete + summary.in_progress + open, summary.total);
    assert_eq!(summary.open, open);
}

#[test]
fn test_report_for_document() {
    let report = build_report(&extract_str(SYSTEM_TODO));

    assert!(report.starts_with("# System TODO Automation Report\n\n## Summary\n"));
    assert!(report.contains("- Total checklist items: 7\n"));
    assert!(report.contains("- Open: 5\n"));

    let foundations = report.find("### Foundations\n").unwrap();
    let runbooks = report.find("### Foundations > Runbooks\n").unwrap();
    let narrative = report.find("### Narrative\n").unwrap();
    assert!(foundations < runbooks && runbooks < narrative);

    assert!(report.contains(
        "### Narrative\n- Outline chapter one (line 22)\n- Sequence diagram for playback (line 25)\n"
    ));
    assert!(report.ends_with(")\n"));
    assert!(!report.ends_with("\n\n"));
}

#[test]
fn test_stub_queues_written_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("automation");

    let items = extract_str(SYSTEM_TODO);
    let config = TallyConfig::default();
    let queues = build_stub_queues(&items, &config.categories);
    write_stub_queues(&out_dir, &queues).unwrap();

    let diagram = fs::read_to_string(out_dir.join("diagram_stub_queue.md")).unwrap();
    assert!(diagram.starts_with("# Diagram Stub Queue\n\n## Add ERD diagram for schema\n\n```mermaid\n"));
    assert!(diagram.contains("## Sequence diagram for playback\n"));
    // In-progress items are not queued
    assert!(!diagram.contains("onboarding flowchart"));
    assert!(diagram.ends_with("```\n"));

    let playbook = fs::read_to_string(out_dir.join("playbook_stub_queue.md")).unwrap();
    assert!(playbook.contains("## Write on-call playbook\n\n### Objective\n- TODO\n"));
    assert!(playbook.ends_with("### Escalation\n- TODO\n"));
}

#[test]
fn test_category_without_matches_renders_placeholder() {
    let items = extract_str(SYSTEM_TODO);
    let category = StubCategory::new(
        "security",
        "Security Stub Queue",
        "security_stub_queue.md",
        &["threat model"],
        "- TODO",
    );
    let queues = build_stub_queues(&items, &[category]);

    assert_eq!(
        queues[0].content,
        "# Security Stub Queue\n\nNo open items matched this category.\n"
    );
}

#[test]
fn test_json_export_for_document() {
    let items = extract_str(SYSTEM_TODO);
    let json = items_to_json(&items).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0]["status"], "x");
    assert_eq!(records[0]["section_path"], "Foundations");
    assert_eq!(records[0]["line_number"], 6);
}

#[test]
fn test_extract_is_idempotent() {
    assert_eq!(extract_str(SYSTEM_TODO), extract_str(SYSTEM_TODO));
}
