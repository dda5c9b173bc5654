use std::{future::Future, pin::Pin};

use ai_llm_service::{AiLlmError, OpenAiService};

/// Provider interface for the remote fallback.
///
/// Implement this trait to plug in another completion backend, or a fake in
/// tests.
pub trait CompletionBackend: Send + Sync {
    /// Sends a `(system, user)` pair and returns the raw text of the first
    /// choice.
    fn complete<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, AiLlmError>> + Send + 'a>>;
}

impl CompletionBackend for OpenAiService {
    fn complete<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, AiLlmError>> + Send + 'a>> {
        Box::pin(self.generate(user, Some(system)))
    }
}
