//! J-Suno: turns a song description into a Suno prompt pack (style, title,
//! lyrics) with Gemini, and serves a small studio to edit and copy it.

pub mod config;
pub mod credentials;
pub mod errors;
pub mod llm_client;
pub mod pack;
pub mod routes;
pub mod session;
pub mod state;
pub mod ui;

/// Installs the fmt subscriber, filtered by `RUST_LOG` or `{crate}={default_level}`.
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), default_level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
