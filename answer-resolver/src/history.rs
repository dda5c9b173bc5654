//! Caller-owned, append-only record of resolved questions.

use serde::{Deserialize, Serialize};

/// One resolved question and the answer shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
}

/// Ordered question/answer pairs for one session.
///
/// Entries are only ever appended. Serializes as a plain JSON array so it can
/// travel with each request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.entries.push(HistoryEntry {
            question: question.into(),
            answer: answer.into(),
        });
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SessionHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut h = SessionHistory::new();
        h.push("q1", "a1");
        h.push("q2", "a2");
        let qs: Vec<_> = h.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(qs, ["q1", "q2"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut h = SessionHistory::new();
        h.push("q", "a");
        let s = serde_json::to_string(&h).unwrap();
        assert_eq!(s, r#"[{"question":"q","answer":"a"}]"#);
        let back: SessionHistory = serde_json::from_str(&s).unwrap();
        assert_eq!(back, h);
    }
}
