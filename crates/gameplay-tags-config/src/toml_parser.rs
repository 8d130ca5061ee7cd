//! TOML configuration parser for tag lists.

use std::collections::HashSet;
use std::path::Path;

use gameplay_tags::{MAX_DEPTH, Tag, TagError, TagRegistry};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Behavior when the same path is listed more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnDuplicate {
    /// Keep the first occurrence silently (default)
    #[default]
    Ignore,
    /// Keep the first occurrence and log a warning
    Warn,
    /// Reject the file
    Error,
}

/// Parsed tag-list configuration.
///
/// Paths keep file order: registration order decides identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsConfig {
    /// Behavior when paths are listed twice
    pub on_duplicate: OnDuplicate,
    paths: Vec<String>,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
struct RawTagsConfig {
    /// "ignore" (default), "warn" or "error"
    on_duplicate: Option<String>,
    /// Tag definitions
    tags: RawTags,
}

#[derive(Debug, Deserialize)]
struct RawTags {
    /// List of dot-separated paths
    paths: Vec<String>,
}

impl TagsConfig {
    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TagsConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TagsConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, TagsConfigError> {
        let raw: RawTagsConfig = toml::from_str(content)?;

        let on_duplicate = match raw.on_duplicate.as_deref() {
            None | Some("ignore") => OnDuplicate::Ignore,
            Some("warn") => OnDuplicate::Warn,
            Some("error") => OnDuplicate::Error,
            Some(other) => {
                return Err(TagsConfigError::Validation(format!(
                    "Invalid on_duplicate value '{}': expected 'ignore', 'warn' or 'error'",
                    other
                )));
            }
        };

        let paths = Self::collect_paths(raw.tags.paths, on_duplicate)?;
        debug!(paths = paths.len(), "parsed tag configuration");

        Ok(Self {
            on_duplicate,
            paths,
        })
    }

    /// Validated paths in file order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Build a fresh registry holding every configured path.
    pub fn build_registry(&self) -> Result<TagRegistry, TagsConfigError> {
        Ok(TagRegistry::from_paths(&self.paths)?)
    }

    /// Register the configured paths into an existing registry.
    pub fn apply_to(
        &self,
        registry: &mut TagRegistry,
        reset_first: bool,
    ) -> Result<Vec<Tag>, TagsConfigError> {
        Ok(registry.register_paths(&self.paths, reset_first)?)
    }

    fn collect_paths(
        raw: Vec<String>,
        on_duplicate: OnDuplicate,
    ) -> Result<Vec<String>, TagsConfigError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut paths = Vec::with_capacity(raw.len());

        for path in raw {
            Self::validate_path(&path)?;

            if seen.contains(&path) {
                match on_duplicate {
                    OnDuplicate::Ignore => {}
                    OnDuplicate::Warn => warn!(path = %path, "duplicate tag path ignored"),
                    OnDuplicate::Error => {
                        return Err(TagsConfigError::Validation(format!(
                            "Duplicate path '{}'",
                            path
                        )));
                    }
                }
                continue;
            }
            seen.insert(path.clone());
            paths.push(path);
        }

        Ok(paths)
    }

    fn validate_path(path: &str) -> Result<(), TagsConfigError> {
        if path.is_empty() {
            return Err(TagsConfigError::Validation("Empty path not allowed".into()));
        }
        if path.starts_with('.') || path.ends_with('.') {
            return Err(TagsConfigError::Validation(format!(
                "Invalid path '{}': cannot start or end with '.'",
                path
            )));
        }
        if path.contains("..") {
            return Err(TagsConfigError::Validation(format!(
                "Invalid path '{}': contains '..'",
                path
            )));
        }

        let segments: Vec<&str> = path.split('.').collect();
        if segments.len() > MAX_DEPTH {
            return Err(TagsConfigError::Validation(format!(
                "Invalid path '{}': {} levels exceeds the maximum of {}",
                path,
                segments.len(),
                MAX_DEPTH
            )));
        }

        for seg in &segments {
            // Starts with letter/underscore, continues with alphanumerics/underscore
            let mut chars = seg.chars();
            if let Some(first) = chars.next()
                && !first.is_alphabetic()
                && first != '_'
            {
                return Err(TagsConfigError::Validation(format!(
                    "Invalid path '{}': segment '{}' must start with letter or underscore",
                    path, seg
                )));
            }
            if let Some(c) = chars.find(|c| !c.is_alphanumeric() && *c != '_') {
                return Err(TagsConfigError::Validation(format!(
                    "Invalid path '{}': segment '{}' contains invalid character '{}'",
                    path, seg, c
                )));
            }
        }
        Ok(())
    }
}

/// Errors while loading a tag configuration.
#[derive(Debug, Error)]
pub enum TagsConfigError {
    #[error("IO error: failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Registry error: {0}")]
    Registry(#[from] TagError),
}
