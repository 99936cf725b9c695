//! Checklist extractor
//!
//! Scans markdown lines for `- [ ]` / `- [x]` / `- [~]` items, tracking the
//! enclosing heading chain and skipping anything inside fenced code blocks.
//!
//! Line grammars (anchored at column 0):
//! - heading: `#{1,6} ` followed by at least one character
//! - checklist item: `- [` + one of ` `, `x`, `~` + `] ` followed by at least one character
//! - fence: trimmed line starting with three backticks

use crate::models::{ChecklistItem, ItemStatus, SECTION_SEPARATOR};
use std::collections::BTreeMap;

const FENCE_MARKER: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Most recent heading title at each level.
///
/// Recording a heading at level L replaces level L and drops every deeper level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingState {
    titles: BTreeMap<usize, String>,
}

impl HeadingState {
    pub fn record(&mut self, level: usize, title: &str) {
        self.titles.split_off(&level);
        self.titles.insert(level, title.to_string());
    }

    /// Titles at level 2 and deeper, shallowest first, joined with `" > "`.
    /// Level 1 is the document title and never part of the path.
    pub fn section_path(&self) -> String {
        self.titles
            .range(2..)
            .map(|(_, title)| title.as_str())
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR)
    }
}

/// State carried from one line to the next during a single scan
#[derive(Debug, Clone, Default)]
struct ScanState {
    in_fence: bool,
    headings: HeadingState,
}

/// A recognized checkbox line, before section context is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxLine<'a> {
    pub status: ItemStatus,
    pub text: &'a str,
}

/// Whether a line opens or closes a fenced code block
pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Match `#{1,6} <title>`, returning the level and the trimmed title
pub fn match_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = line[level..].strip_prefix(' ')?;
    if rest.is_empty() {
        return None;
    }

    Some((level, rest.trim()))
}

/// Match `- [s] <text>` where `s` is a recognized status symbol
pub fn match_checkbox(line: &str) -> Option<CheckboxLine<'_>> {
    let rest = line.strip_prefix("- [")?;
    let symbol = rest.chars().next()?;
    let status = ItemStatus::from_symbol(symbol)?;

    let text = rest[symbol.len_utf8()..].strip_prefix("] ")?;
    if text.is_empty() {
        return None;
    }

    Some(CheckboxLine {
        status,
        text: text.trim(),
    })
}

/// Process one line, returning the updated state and the item it produced, if any
fn step(mut state: ScanState, line: &str, line_number: usize) -> (ScanState, Option<ChecklistItem>) {
    if is_fence(line) {
        state.in_fence = !state.in_fence;
        return (state, None);
    }
    if state.in_fence {
        return (state, None);
    }

    if let Some((level, title)) = match_heading(line) {
        state.headings.record(level, title);
        return (state, None);
    }

    let item = match_checkbox(line).map(|checkbox| ChecklistItem {
        status: checkbox.status,
        text: checkbox.text.to_string(),
        section_path: state.headings.section_path(),
        line_number,
    });

    (state, item)
}

/// Extract checklist items from lines, in source order
pub fn extract<I>(lines: I) -> Vec<ChecklistItem>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let (_, items) = lines.into_iter().enumerate().fold(
        (ScanState::default(), Vec::new()),
        |(state, mut items), (idx, line)| {
            let (state, item) = step(state, line.as_ref(), idx + 1);
            items.extend(item);
            (state, items)
        },
    );

    tracing::debug!(items = items.len(), "extracted checklist items");
    items
}

/// Extract checklist items from a whole document
pub fn extract_str(content: &str) -> Vec<ChecklistItem> {
    extract(content.lines())
}
