use std::sync::Arc;

use ai_llm_service::{HealthService, HealthStatus, LlmModelConfig};
use answer_resolver::Resolver;
use thiserror::Error;

use crate::ui::variant::PageVariant;

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown WIDGET_VARIANT {0:?} (expected classic, sidebar or chat)")]
    UnknownVariant(String),

    #[error("API_ADDRESS must not be empty")]
    EmptyAddress,
}

/// HTTP-layer settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, e.g. "127.0.0.1:8080".
    pub api_address: String,
    /// Which page presentation to serve.
    pub variant: PageVariant,
}

impl AppConfig {
    /// Load from `API_ADDRESS` and `WIDGET_VARIANT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_address = match std::env::var("API_ADDRESS") {
            Ok(v) if v.trim().is_empty() => return Err(ConfigError::EmptyAddress),
            Ok(v) => v.trim().to_string(),
            Err(_) => DEFAULT_API_ADDRESS.to_string(),
        };

        let variant = match std::env::var("WIDGET_VARIANT") {
            Ok(v) if !v.trim().is_empty() => v.parse()?,
            _ => PageVariant::default(),
        };

        Ok(Self {
            api_address,
            variant,
        })
    }
}

/// Upstream health probe plus the config it checks.
pub struct UpstreamProbe {
    pub service: HealthService,
    pub cfg: LlmModelConfig,
}

impl UpstreamProbe {
    pub async fn check(&self) -> HealthStatus {
        self.service.check(&self.cfg).await
    }
}

/// Shared state for all HTTP handlers.
pub struct AppState {
    pub config: AppConfig,
    pub resolver: Arc<Resolver>,
    /// `None` disables the upstream part of `/health`.
    pub upstream: Option<UpstreamProbe>,
}

impl AppState {
    pub fn new(config: AppConfig, resolver: Arc<Resolver>) -> Self {
        Self {
            config,
            resolver,
            upstream: None,
        }
    }

    pub fn with_upstream_probe(mut self, probe: UpstreamProbe) -> Self {
        self.upstream = Some(probe);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Env vars are process-global; every test touching them holds this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(set: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: serialized by ENV_LOCK; nothing else in this crate reads these vars.
        unsafe {
            std::env::remove_var("API_ADDRESS");
            std::env::remove_var("WIDGET_VARIANT");
            for (k, v) in set {
                std::env::set_var(k, v);
            }
        }
        let out = f();
        unsafe {
            std::env::remove_var("API_ADDRESS");
            std::env::remove_var("WIDGET_VARIANT");
        }
        out
    }

    #[test]
    fn defaults_to_localhost_classic() {
        let cfg = with_env(&[], AppConfig::from_env).unwrap();
        assert_eq!(cfg.api_address, DEFAULT_API_ADDRESS);
        assert_eq!(cfg.api_address, "127.0.0.1:8080");
        assert_eq!(cfg.variant, PageVariant::Classic);
    }

    #[test]
    fn reads_address_and_variant() {
        let cfg = with_env(
            &[("API_ADDRESS", " 0.0.0.0:3000 "), ("WIDGET_VARIANT", "chat")],
            AppConfig::from_env,
        )
        .unwrap();
        assert_eq!(cfg.api_address, "0.0.0.0:3000");
        assert_eq!(cfg.variant, PageVariant::Chat);
    }

    #[test]
    fn blank_address_and_unknown_variant_are_errors() {
        let err = with_env(&[("API_ADDRESS", "  ")], AppConfig::from_env).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAddress));

        let err = with_env(&[("WIDGET_VARIANT", "fancy")], AppConfig::from_env).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVariant(ref v) if v.contains("fancy")));
    }
}
