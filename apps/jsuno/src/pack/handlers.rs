//! Axum route handlers for the JSON pack API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::pack::generator::generate_pack;
use crate::pack::models::{Preset, PromptPack, PRESETS};
use crate::pack::rewriter::rewrite_lyrics;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GeneratePackRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub lyrics: String,
    #[serde(default)]
    pub instruction: String,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub lyrics: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/presets
pub async fn handle_list_presets() -> Json<&'static [Preset]> {
    Json(&PRESETS)
}

/// POST /api/v1/pack/generate
///
/// An empty prompt is allowed; the model invents a song.
pub async fn handle_generate_pack(
    State(state): State<AppState>,
    Json(request): Json<GeneratePackRequest>,
) -> Result<Json<PromptPack>, AppError> {
    let llm = state.llm()?;
    let pack = generate_pack(llm, &request.prompt).await?;
    Ok(Json(pack))
}

/// POST /api/v1/pack/rewrite
///
/// Blank lyrics are forwarded as-is, the same as the studio's rewrite button.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let llm = state.llm()?;
    let lyrics = rewrite_lyrics(llm, &request.lyrics, &request.instruction).await?;
    Ok(Json(RewriteResponse { lyrics }))
}
