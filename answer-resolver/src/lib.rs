//! Answer resolution for the support widget.
//!
//! Public API: [`Resolver::resolve`]. It scans the [`AnswerTable`] in order for
//! the first pattern contained (case-insensitively) in the question and returns
//! its canned answer; on a miss it asks the remote completion backend and
//! returns the trimmed text. [`Resolver::resolve_into`] also appends the pair
//! to a caller-owned [`SessionHistory`].

mod backend;
mod cfg;
mod error;
mod history;
mod prompt;
mod resolver;
mod table;

pub use backend::CompletionBackend;
pub use cfg::ResolverConfig;
pub use error::ResolverError;
pub use history::{HistoryEntry, SessionHistory};
pub use prompt::DEFAULT_SYSTEM;
pub use resolver::{AnswerSource, Resolution, Resolver};
pub use table::{AnswerTable, QaEntry};
