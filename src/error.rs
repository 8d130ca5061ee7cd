//! Error types for tag registration.

use thiserror::Error;

/// Failures surfaced by the registry and identifier encoding.
///
/// Misuse such as invalid tags or non-positive stack counts is absorbed as
/// a no-op and never shows up here. Only malformed input and identifier
/// capacity problems are reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("empty tag path is not allowed")]
    EmptyPath,

    #[error("tag path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    #[error("'{parent}' already has {max} children; no sibling index left")]
    SiblingOverflow { parent: String, max: usize },

    #[error("tag path '{path}' has depth {depth} which exceeds MAX_DEPTH ({max})")]
    DepthOverflow {
        path: String,
        depth: usize,
        max: usize,
    },
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, TagError>;
