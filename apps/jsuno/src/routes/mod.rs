pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pack::handlers as api;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML studio
        .route("/", get(ui::handle_index))
        .route("/presets/:key", post(ui::handle_preset))
        .route("/generate", post(ui::handle_generate))
        .route("/pack", post(ui::handle_save_pack))
        .route("/rewrite", post(ui::handle_rewrite))
        // JSON API
        .route("/api/v1/presets", get(api::handle_list_presets))
        .route("/api/v1/pack/generate", post(api::handle_generate_pack))
        .route("/api/v1/pack/rewrite", post(api::handle_rewrite))
        .with_state(state)
}
