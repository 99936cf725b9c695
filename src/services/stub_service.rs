//! Stub service - Keyword-filtered stub queues for open checklist items

use crate::models::{ChecklistItem, StubCategory};
use crate::utils::fs::write_output;
use crate::{Context, Result};
use std::path::{Path, PathBuf};

/// Placeholder emitted when no open item matches a category
pub const NO_MATCH_PLACEHOLDER: &str = "No open items matched this category.";

/// Rendered stub queue for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubQueue {
    pub name: String,
    pub file_name: String,
    /// Texts of the matched open items, in source order
    pub entries: Vec<String>,
    pub content: String,
}

/// Texts of open items matching any of the category's keywords.
///
/// Keeps source order and duplicates.
pub fn select_entries<'a>(items: &'a [ChecklistItem], category: &StubCategory) -> Vec<&'a str> {
    items
        .iter()
        .filter(|item| item.status.is_open() && category.matches(&item.text))
        .map(|item| item.text.as_str())
        .collect()
}

/// Render a stub queue document: a title, then each entry as a section
/// followed by the template body
pub fn render_stub_queue<S: AsRef<str>>(title: &str, entries: &[S], template: &str) -> String {
    let mut content = format!("# {}\n\n", title);

    if entries.is_empty() {
        content.push_str(NO_MATCH_PLACEHOLDER);
        content.push('\n');
    } else {
        for entry in entries {
            content.push_str(&format!("## {}\n\n", entry.as_ref()));
            for line in template.trim().lines() {
                content.push_str(line);
                content.push('\n');
            }
            content.push('\n');
        }
    }

    let mut rendered = content.trim_end().to_string();
    rendered.push('\n');
    rendered
}

/// Build one stub queue per category, in category order
pub fn build_stub_queues(items: &[ChecklistItem], categories: &[StubCategory]) -> Vec<StubQueue> {
    categories
        .iter()
        .map(|category| {
            let entries = select_entries(items, category);
            tracing::debug!(
                category = %category.name,
                matched = entries.len(),
                "built stub queue"
            );
            StubQueue {
                name: category.name.clone(),
                file_name: category.file_name.clone(),
                content: render_stub_queue(&category.title, &entries, &category.template),
                entries: entries.into_iter().map(String::from).collect(),
            }
        })
        .collect()
}

/// Write each queue to `out_dir/<file_name>`, returning the written paths
pub fn write_stub_queues(out_dir: &Path, queues: &[StubQueue]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(queues.len());
    for queue in queues {
        let path = out_dir.join(&queue.file_name);
        write_output(&path, &queue.content)
            .with_context(|| format!("Failed to write stub queue {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
