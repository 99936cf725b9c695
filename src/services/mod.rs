//! Service layer for tally
//!
//! Rendering logic shared by the CLI commands. Services take parsed checklist
//! items and return documents; only `write_stub_queues` touches the filesystem.

pub mod export_service;
pub mod report_service;
pub mod stub_service;

// Re-export commonly used types
pub use export_service::items_to_json;
pub use report_service::{build_report, group_open_items, ChecklistSummary};
pub use stub_service::{
    build_stub_queues, render_stub_queue, select_entries, write_stub_queues, StubQueue,
    NO_MATCH_PLACEHOLDER,
};
