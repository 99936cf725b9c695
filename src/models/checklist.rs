//! Checklist data models
//!
//! A checklist item is one `- [status] text` line found in a markdown TODO
//! file, together with the heading chain that governs it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback section label for items with no enclosing level-2+ heading
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Separator used when joining heading titles into a section path
pub const SECTION_SEPARATOR: &str = " > ";

/// Checkbox status, serialized as the literal symbol found between the brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(rename = " ")]
    Open,
    #[serde(rename = "x")]
    Complete,
    #[serde(rename = "~")]
    InProgress,
}

impl ItemStatus {
    /// Parse a status symbol. Only ` `, `x` and `~` are recognized.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Open),
            'x' => Some(Self::Complete),
            '~' => Some(Self::InProgress),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Open => ' ',
            Self::Complete => 'x',
            Self::InProgress => '~',
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "open",
            Self::Complete => "complete",
            Self::InProgress => "in progress",
        };
        f.write_str(label)
    }
}

/// One checkbox line extracted from the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub status: ItemStatus,
    /// Trimmed text after the checkbox marker
    pub text: String,
    /// Enclosing headings at level 2 and deeper, joined with `" > "`.
    /// Empty when the item has no such heading.
    pub section_path: String,
    /// 1-based line number in the source
    pub line_number: usize,
}

impl ChecklistItem {
    /// Section key used for grouping, substituting [`UNCATEGORIZED`] for an empty path
    pub fn section_or_default(&self) -> &str {
        if self.section_path.trim().is_empty() {
            UNCATEGORIZED
        } else {
            &self.section_path
        }
    }
}
