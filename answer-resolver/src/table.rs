//! Static answer table: ordered (pattern, answer) pairs matched by
//! case-insensitive substring.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ResolverError;

/// One known question pattern and its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub pattern: String,
    pub answer: String,
}

impl QaEntry {
    pub fn new(pattern: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            answer: answer.into(),
        }
    }
}

/// Built-in entries, in lookup order.
const BUILTIN: [(&str, &str); 5] = [
    (
        "What does the eligibility verification agent (EVA) do?",
        "EVA automates the process of verifying a patient’s eligibility and benefits information in real-time, eliminating manual data entry errors and reducing claim rejections.",
    ),
    (
        "What does the claims processing agent (CAM) do?",
        "CAM streamlines the submission and management of claims, improving accuracy, reducing manual intervention, and accelerating reimbursements.",
    ),
    (
        "How does the payment posting agent (PHIL) work?",
        "PHIL automates the posting of payments to patient accounts, ensuring fast, accurate reconciliation of payments and reducing administrative burden.",
    ),
    (
        "Tell me about Thoughtful AI's Agents.",
        "Thoughtful AI provides a suite of AI-powered automation agents designed to streamline healthcare processes. These include Eligibility Verification (EVA), Claims Processing (CAM), and Payment Posting (PHIL), among others.",
    ),
    (
        "What are the benefits of using Thoughtful AI's agents?",
        "Using Thoughtful AI's Agents can significantly reduce administrative costs, improve operational efficiency, and reduce errors in critical processes like claims management and payment posting.",
    ),
];

/// Immutable, ordered answer table.
///
/// Patterns are case-folded once at construction so lookups only fold the
/// question.
#[derive(Debug, Clone)]
pub struct AnswerTable {
    entries: Vec<QaEntry>,
    folded: Vec<String>,
}

impl AnswerTable {
    /// Builds a table from entries, keeping their order.
    ///
    /// # Errors
    /// - [`ResolverError::EmptyTable`] if `entries` is empty
    /// - [`ResolverError::InvalidEntry`] if a pattern or answer is blank
    pub fn new(entries: Vec<QaEntry>) -> Result<Self, ResolverError> {
        if entries.is_empty() {
            return Err(ResolverError::EmptyTable);
        }
        if let Some(index) = entries
            .iter()
            .position(|e| e.pattern.trim().is_empty() || e.answer.trim().is_empty())
        {
            return Err(ResolverError::InvalidEntry { index });
        }

        let folded = entries.iter().map(|e| e.pattern.to_lowercase()).collect();
        Ok(Self { entries, folded })
    }

    /// The five built-in support entries.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(p, a)| QaEntry::new(*p, *a))
            .collect::<Vec<_>>();
        let folded = entries.iter().map(|e| e.pattern.to_lowercase()).collect();
        Self { entries, folded }
    }

    /// Loads a table from a JSON file shaped like
    /// `[{"pattern": "...", "answer": "..."}, ...]`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ResolverError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ResolverError::TableIo {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<QaEntry> =
            serde_json::from_str(&raw).map_err(|source| ResolverError::TableParse {
                path: path.to_path_buf(),
                source,
            })?;

        let table = Self::new(entries)?;
        info!(path = %path.display(), entries = table.len(), "answer table loaded");
        Ok(table)
    }

    /// First entry (in table order) whose pattern is a case-insensitive
    /// substring of `question`.
    pub fn lookup(&self, question: &str) -> Option<&QaEntry> {
        let q = question.to_lowercase();
        self.folded
            .iter()
            .position(|p| q.contains(p.as_str()))
            .map(|i| &self.entries[i])
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_has_five_entries_in_order() {
        let t = AnswerTable::builtin();
        assert_eq!(t.len(), 5);
        assert!(t.entries()[0].pattern.contains("(EVA)"));
        assert!(t.entries()[1].pattern.contains("(CAM)"));
        assert!(t.entries()[2].pattern.contains("(PHIL)"));
        assert!(!t.entries()[0].answer.contains('â'));
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_text() {
        let t = AnswerTable::builtin();
        let hit = t
            .lookup("hey!! WHAT DOES THE CLAIMS PROCESSING AGENT (cam) DO? thanks")
            .unwrap();
        assert!(hit.answer.starts_with("CAM streamlines"));
    }

    #[test]
    fn lookup_misses_partial_patterns() {
        let t = AnswerTable::builtin();
        assert!(t.lookup("What does EVA do?").is_none());
        assert!(t.lookup("hello").is_none());
    }

    #[test]
    fn rejects_empty_and_blank_entries() {
        assert!(matches!(
            AnswerTable::new(vec![]),
            Err(ResolverError::EmptyTable)
        ));
        assert!(matches!(
            AnswerTable::new(vec![QaEntry::new("a", "b"), QaEntry::new("  ", "c")]),
            Err(ResolverError::InvalidEntry { index: 1 })
        ));
    }

    #[test]
    fn loads_from_json_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"[{{"pattern": "refund", "answer": "Refunds take 5 days."}},
                {{"pattern": "hours", "answer": "9 to 5."}}]"#
        )
        .unwrap();

        let t = AnswerTable::from_json_file(f.path()).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.lookup("Opening HOURS?").unwrap().answer, "9 to 5.");
    }

    #[test]
    fn reports_bad_json_and_missing_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"pattern": "x"}}"#).unwrap();
        assert!(matches!(
            AnswerTable::from_json_file(f.path()),
            Err(ResolverError::TableParse { .. })
        ));
        assert!(matches!(
            AnswerTable::from_json_file("/definitely/not/here.json"),
            Err(ResolverError::TableIo { .. })
        ));
    }
}
