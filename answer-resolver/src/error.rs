//! Typed error for the answer-resolver crate.

use std::path::PathBuf;

use ai_llm_service::{AiLlmError, FailureClass};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    /// The question was empty after trimming; nothing was looked up.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// The remote completion call failed.
    #[error("remote completion failed: {0}")]
    Remote(#[from] AiLlmError),

    /// Answer table file could not be read.
    #[error("failed to read answer table {path}: {source}")]
    TableIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Answer table file is not a JSON list of `{pattern, answer}` objects.
    #[error("failed to parse answer table {path}: {source}")]
    TableParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The table has no entries.
    #[error("answer table must contain at least one entry")]
    EmptyTable,

    /// An entry has a blank pattern or answer.
    #[error("answer table entry #{index} has an empty pattern or answer")]
    InvalidEntry { index: usize },
}

impl ResolverError {
    /// Failure class of a remote error; `None` for local errors.
    pub fn failure_class(&self) -> Option<FailureClass> {
        match self {
            ResolverError::Remote(e) => Some(e.failure_class()),
            _ => None,
        }
    }
}
