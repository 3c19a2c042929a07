//! Error types for study-core.

use thiserror::Error;

/// Errors that can occur while building an outline from summary text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlineError {
    #[error("line {line} has no heading to attach to: {content:?}")]
    UnattributedLine { line: usize, content: String },

    #[error("duplicate heading {heading:?} at line {line}")]
    DuplicateHeading { heading: String, line: usize },
}

/// Errors reported by a text generator backend.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("text generation request failed: {0}")]
    Generation(String),

    #[error("generator returned an unusable response: {0}")]
    MalformedResponse(String),
}
