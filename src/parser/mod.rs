pub mod checklist;

pub use checklist::{extract, extract_str, match_checkbox, match_heading, HeadingState};
