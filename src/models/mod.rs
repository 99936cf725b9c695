pub mod checklist;
pub mod config;

pub use checklist::{ChecklistItem, ItemStatus, SECTION_SEPARATOR, UNCATEGORIZED};
pub use config::{ConfigError, StubCategory, TallyConfig};
