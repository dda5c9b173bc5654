//! Shared LLM service: OpenAI chat completions, env-driven config, classified
//! errors, a provider health probe, and a library-scoped tracing layer.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use config::default_config::config_openai_chat;
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{AiLlmError, FailureClass};
pub use health_service::{HealthService, HealthStatus};
pub use services::open_ai_service::OpenAiService;
