use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use jsuno::config::Config;
use jsuno::credentials::resolve_credential;
use jsuno::llm_client::{GeminiClient, TextGenerator};
use jsuno::routes::build_router;
use jsuno::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    jsuno::init_tracing(&config.rust_log);

    info!("Starting J-Suno v{}", env!("CARGO_PKG_VERSION"));

    // Missing key is not fatal: the studio runs in degraded mode
    let llm: Option<Arc<dyn TextGenerator>> = match resolve_credential(&config.secrets_path) {
        Some(credential) => {
            let client = GeminiClient::new(
                credential,
                config.gemini_api_base.clone(),
                config.gemini_model.clone(),
            )?;
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client) as Arc<dyn TextGenerator>)
        }
        None => {
            warn!("Running in degraded mode: generation is disabled");
            None
        }
    };

    let state = AppState::new(llm, config.clone());
    state.sessions.spawn_sweeper();
    info!("Session TTL: {}s", config.session_ttl_secs);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
