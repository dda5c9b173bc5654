use std::{sync::Arc, time::Instant};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    backend::CompletionBackend, error::ResolverError, history::SessionHistory,
    prompt::DEFAULT_SYSTEM, table::AnswerTable,
};

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Table,
    Remote,
}

/// A resolved answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub answer: String,
    pub source: AnswerSource,
}

/// Decides between the static answer table and the remote fallback.
///
/// Both collaborators are injected; the resolver itself holds no mutable state
/// and can be shared across requests behind an `Arc`.
pub struct Resolver {
    table: AnswerTable,
    backend: Arc<dyn CompletionBackend>,
}

impl Resolver {
    pub fn new(table: AnswerTable, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            table,
            backend,
        }
    }

    pub fn table(&self) -> &AnswerTable {
        &self.table
    }

    /// Resolves `question` against the table, falling back to the remote
    /// completion service.
    ///
    /// The first table entry (in order) whose pattern is a case-insensitive
    /// substring of the question wins. Otherwise the question is sent verbatim
    /// with the fixed system instruction, and the trimmed text of the first
    /// choice is returned.
    ///
    /// # Errors
    /// - [`ResolverError::EmptyQuestion`] for blank input (nothing is consulted)
    /// - [`ResolverError::Remote`] when the fallback call fails
    ///
    /// # Example
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use answer_resolver::{AnswerTable, Resolver};
    /// # use ai_llm_service::{OpenAiService, config_openai_chat};
    /// # #[tokio::main] async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let backend = Arc::new(OpenAiService::new(config_openai_chat()?)?);
    /// let resolver = Resolver::new(AnswerTable::builtin(), backend);
    /// let res = resolver.resolve("Tell me about Thoughtful AI's Agents.").await?;
    /// println!("{}", res.answer);
    /// # Ok(()) }
    /// ```
    #[instrument(name = "resolve", skip_all, fields(question_len = question.len()))]
    pub async fn resolve(&self, question: &str) -> Result<Resolution, ResolverError> {
        if question.trim().is_empty() {
            return Err(ResolverError::EmptyQuestion);
        }

        if let Some(entry) = self.table.lookup(question) {
            debug!(pattern = %entry.pattern, "answer table hit");
            return Ok(Resolution {
                answer: entry.answer.clone(),
                source: AnswerSource::Table,
            });
        }

        let started = Instant::now();
        match self.backend.complete(DEFAULT_SYSTEM, question).await {
            Ok(text) => {
                info!(
                    latency_ms = started.elapsed().as_millis(),
                    "answered by remote completion"
                );
                Ok(Resolution {
                    answer: text.trim().to_string(),
                    source: AnswerSource::Remote,
                })
            }
            Err(e) => {
                warn!(
                    class = ?e.failure_class(),
                    error = %e,
                    latency_ms = started.elapsed().as_millis(),
                    "remote completion failed"
                );
                Err(e.into())
            }
        }
    }

    /// Resolves `question` and appends the pair to `history` on success.
    ///
    /// On error `history` is left untouched.
    pub async fn resolve_into(
        &self,
        question: &str,
        history: &mut SessionHistory,
    ) -> Result<Resolution, ResolverError> {
        let res = self.resolve(question).await?;
        history.push(question, res.answer.clone());
        Ok(res)
    }
}
