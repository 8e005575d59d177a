//! Errors for constructing resolver inputs.

use thiserror::Error;

/// A dotted path that cannot form a [`Reference`](super::Reference).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("reference has no segments")]
    Empty,

    #[error("segment {index} of '{path}' is empty")]
    EmptySegment { path: String, index: usize },
}

impl ReferenceError {
    pub fn empty_segment(path: impl Into<String>, index: usize) -> Self {
        Self::EmptySegment {
            path: path.into(),
            index,
        }
    }
}
