use answer_resolver::{AnswerSource, SessionHistory};
use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Natural language question.
    pub question: String,
    /// Pairs answered earlier in this session; the new pair is appended.
    #[serde(default)]
    pub history: SessionHistory,
}

/// Response payload for `POST /api/ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Final answer (plain text).
    pub answer: String,
    /// `table` for a canned answer, `remote` for a generated one.
    pub source: AnswerSource,
    /// Request history with this question/answer appended.
    pub history: SessionHistory,
}
