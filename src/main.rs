use std::sync::Arc;

use ai_llm_service::{HealthService, OpenAiService, config_openai_chat, telemetry};
use answer_resolver::{CompletionBackend, Resolver, ResolverConfig};
use anyhow::Context;
use api::core::app_state::{AppConfig, AppState, UpstreamProbe};
use tracing::{info, warn};

/// Seconds the `/health` upstream probe may take.
const HEALTH_PROBE_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment may already be set.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("failed to read .env");
        }
    }

    telemetry::init_subscriber("info");

    let llm_cfg = config_openai_chat().context("invalid OpenAI configuration")?;
    info!(model = %llm_cfg.model, endpoint = %llm_cfg.endpoint, "completion backend configured");

    let table = ResolverConfig::from_env()
        .load_table()
        .context("failed to load answer table")?;

    let service = OpenAiService::new(llm_cfg.clone()).context("failed to build OpenAI client")?;
    let backend: Arc<dyn CompletionBackend> = Arc::new(service);
    let resolver = Arc::new(Resolver::new(table, backend));

    let config = AppConfig::from_env().context("invalid server configuration")?;
    let mut state = AppState::new(config, resolver);

    match HealthService::new(Some(HEALTH_PROBE_TIMEOUT_SECS)) {
        Ok(service) => {
            state = state.with_upstream_probe(UpstreamProbe {
                service,
                cfg: llm_cfg,
            });
        }
        Err(e) => warn!(error = %e, "upstream health probe disabled"),
    }

    api::start(state).await.context("server failed")?;

    Ok(())
}
