//! Default OpenAI chat config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`    = API key (mandatory)
//! - `OPENAI_MODEL`      = model id (default `gpt-3.5-turbo`)
//! - `OPENAI_BASE_URL`   = API base (default `https://api.openai.com`)
//! - `LLM_MAX_TOKENS`    = output cap (default `150`)
//! - `LLM_TIMEOUT_SECS`  = request timeout (default `60`)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        AiLlmError, ConfigError, env_opt_u32, env_opt_u64, must_env, validate_http_endpoint,
    },
};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Constructs the chat-completion config used for answer fallback.
///
/// # Defaults
/// - `max_tokens = Some(150)`
/// - `temperature = None`, `top_p = None` (provider defaults)
/// - `timeout_secs = Some(60)`
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is missing
/// - [`ConfigError::InvalidNumber`] if a numeric variable does not parse
/// - [`ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` is not http(s)
/// - [`ConfigError::EmptyModel`] if `OPENAI_MODEL` is set to blanks
pub fn config_openai_chat() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;

    let model = match std::env::var("OPENAI_MODEL") {
        Ok(m) if m.trim().is_empty() => return Err(ConfigError::EmptyModel.into()),
        Ok(m) => m.trim().to_string(),
        Err(_) => DEFAULT_OPENAI_MODEL.to_string(),
    };

    let endpoint = std::env::var("OPENAI_BASE_URL")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens: Some(max_tokens),
        temperature: None,
        top_p: None,
        timeout_secs: Some(timeout_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Env vars are process-global; every test touching them holds this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "OPENAI_BASE_URL",
        "LLM_MAX_TOKENS",
        "LLM_TIMEOUT_SECS",
    ];

    fn with_env<T>(set: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: serialized by ENV_LOCK; no other thread in this crate reads these vars.
        unsafe {
            for v in VARS {
                std::env::remove_var(v);
            }
            for (k, v) in set {
                std::env::set_var(k, v);
            }
        }
        let out = f();
        unsafe {
            for v in VARS {
                std::env::remove_var(v);
            }
        }
        out
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg = with_env(&[("OPENAI_API_KEY", "k")], config_openai_chat).unwrap();
        assert_eq!(cfg.model, "gpt-3.5-turbo");
        assert_eq!(cfg.endpoint, "https://api.openai.com");
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.max_tokens, Some(150));
        assert_eq!(cfg.timeout_secs, Some(60));
        assert_eq!(cfg.temperature, None);
        assert_eq!(cfg.top_p, None);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = with_env(
            &[
                ("OPENAI_API_KEY", "k"),
                ("OPENAI_MODEL", " gpt-4o-mini "),
                ("OPENAI_BASE_URL", "http://localhost:9000"),
                ("LLM_MAX_TOKENS", "64"),
                ("LLM_TIMEOUT_SECS", "5"),
            ],
            config_openai_chat,
        )
        .unwrap();
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.endpoint, "http://localhost:9000");
        assert_eq!(cfg.max_tokens, Some(64));
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = with_env(&[], config_openai_chat).unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::MissingVar(_))));
    }

    #[test]
    fn bad_number_is_an_error() {
        let err = with_env(
            &[("OPENAI_API_KEY", "k"), ("LLM_MAX_TOKENS", "abc")],
            config_openai_chat,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::InvalidNumber { .. })
        ));
        assert!(err.to_string().contains("LLM_MAX_TOKENS"));
    }

    #[test]
    fn blank_model_and_bad_endpoint_are_errors() {
        let err = with_env(
            &[("OPENAI_API_KEY", "k"), ("OPENAI_MODEL", "   ")],
            config_openai_chat,
        )
        .unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::EmptyModel)));

        let err = with_env(
            &[("OPENAI_API_KEY", "k"), ("OPENAI_BASE_URL", "api.openai.com")],
            config_openai_chat,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::InvalidFormat { .. })
        ));
    }
}
