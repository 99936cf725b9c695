//! Tally configuration
//!
//! Loaded from `tally.toml` when present. Every field has a default, so a
//! partial file only overrides what it names. Without a `categories` table the
//! built-in diagram and playbook stub queues are used.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "tally.toml";

const DIAGRAM_TEMPLATE: &str = "\
```mermaid
%% TODO: Replace with final diagram.
flowchart TD
  A[Placeholder] --> B[Placeholder]
```
";

const PLAYBOOK_TEMPLATE: &str = "\
### Objective
- TODO

### Inputs
- TODO

### Steps
1. TODO

### Escalation
- TODO
";

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// A stub queue category: which open items it collects and how each is expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubCategory {
    /// Short identifier (e.g., "diagram")
    pub name: String,
    /// Document title rendered as the top-level heading
    pub title: String,
    /// Output file name, written under the stub directory
    pub file_name: String,
    /// Case-insensitive substrings; an item matches if its text contains any
    pub keywords: Vec<String>,
    /// Body emitted under every matched item
    pub template: String,
}

impl StubCategory {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        file_name: impl Into<String>,
        keywords: &[&str],
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            file_name: file_name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            template: template.into(),
        }
    }

    /// Diagram placeholders for items mentioning diagrams, flowcharts, ERDs or schemas
    pub fn diagram() -> Self {
        Self::new(
            "diagram",
            "Diagram Stub Queue",
            "diagram_stub_queue.md",
            &["diagram", "flowchart", "ERD", "schema"],
            DIAGRAM_TEMPLATE,
        )
    }

    /// Playbook skeletons for items mentioning playbooks
    pub fn playbook() -> Self {
        Self::new(
            "playbook",
            "Playbook Stub Queue",
            "playbook_stub_queue.md",
            &["playbook", "playbooks"],
            PLAYBOOK_TEMPLATE,
        )
    }

    /// Whether `text` contains any keyword, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| haystack.contains(&keyword.to_lowercase()))
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("SYSTEM_TODO.md")
}

fn default_json_out() -> PathBuf {
    PathBuf::from("automation/system_todo.json")
}

fn default_report_out() -> PathBuf {
    PathBuf::from("automation/system_todo_report.md")
}

fn default_stub_dir() -> PathBuf {
    PathBuf::from("automation")
}

fn default_categories() -> Vec<StubCategory> {
    vec![StubCategory::diagram(), StubCategory::playbook()]
}

/// Tally configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Checklist file to parse
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Destination of the JSON item export
    #[serde(default = "default_json_out")]
    pub json_out: PathBuf,

    /// Destination of the summary report
    #[serde(default = "default_report_out")]
    pub report_out: PathBuf,

    /// Directory receiving one stub queue file per category
    #[serde(default = "default_stub_dir")]
    pub stub_dir: PathBuf,

    /// Stub queue categories, rendered in this order
    #[serde(default = "default_categories")]
    pub categories: Vec<StubCategory>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            json_out: default_json_out(),
            report_out: default_report_out(),
            stub_dir: default_stub_dir(),
            categories: default_categories(),
        }
    }
}

impl TallyConfig {
    /// Load config from `path`, falling back to defaults if the file does not exist
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            categories = config.categories.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse and validate config from a TOML string
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: TallyConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<string>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render config as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = self.to_toml()?;
        crate::utils::fs::write_output(path, &content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check category definitions for conflicts and unusable values
    pub fn validate(&self) -> ConfigResult<()> {
        let mut names = HashSet::new();
        let mut file_names = HashSet::new();

        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(ConfigError::Invalid("category name must not be empty".to_string()));
            }
            if !names.insert(category.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate category name '{}'",
                    category.name
                )));
            }

            let file_name = category.file_name.trim();
            if file_name.is_empty() || file_name.contains(['/', '\\']) || matches!(file_name, "." | "..") {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' has invalid file name '{}'",
                    category.name, category.file_name
                )));
            }
            if !file_names.insert(category.file_name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "file name '{}' is used by more than one category",
                    category.file_name
                )));
            }

            if category.keywords.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' has no keywords",
                    category.name
                )));
            }
            if category.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "category '{}' has a blank keyword",
                    category.name
                )));
            }
        }

        Ok(())
    }
}
