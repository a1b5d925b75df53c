//! Axum route handlers for the HTML studio.
//!
//! Every POST follows post/redirect/get: it updates the caller's session,
//! records the outcome as a flash message, and redirects to `/`. Failures
//! never escape as raw errors; they become flash messages and leave the
//! existing pack untouched.

use axum::{
    extract::{Form, Path, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::pack::generator::generate_pack;
use crate::pack::models::{find_preset, PromptPack};
use crate::pack::rewriter::rewrite_lyrics;
use crate::session::{session_cookie, Flash};
use crate::state::AppState;
use crate::ui::render::{render_page, PageView, Tab};

pub const MISSING_KEY_MESSAGE: &str = "Set an API key first (GEMINI_API_KEY).";
pub const GENERATION_FAILED_MESSAGE: &str = "Generation failed. Please try again.";
pub const REWRITE_FAILED_MESSAGE: &str = "Rewrite failed. Your lyrics were not changed.";

// ────────────────────────────────────────────────────────────────────────────
// Form types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub user_input: String,
}

#[derive(Debug, Deserialize)]
pub struct PackForm {
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub lyrics: String,
    #[serde(default)]
    pub instruction: String,
}

impl PackForm {
    fn pack(&self) -> PromptPack {
        PromptPack {
            style: self.style.clone(),
            title: self.title.clone(),
            lyrics: self.lyrics.clone(),
        }
    }
}

fn redirect_home(session_id: Uuid) -> Response {
    let mut response = Redirect::to("/").into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, session_cookie(session_id));
    response
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let session = state.sessions.resume_or_create(&headers).await;
    let flash = state.sessions.take_flash(session.id).await;

    let html = render_page(&PageView {
        tab: Tab::from_query(query.tab.as_deref()),
        input_text: &session.input_text,
        pack: session.pack.as_ref(),
        rewrite_instruction: &session.rewrite_instruction,
        flash: flash.as_ref(),
        degraded: state.is_degraded(),
    });

    let mut response = Html(html).into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, session_cookie(session.id));
    response
}

/// POST /presets/:key
///
/// Fills the input box with the preset's canned description.
pub async fn handle_preset(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let preset =
        find_preset(&key).ok_or_else(|| AppError::NotFound(format!("Preset '{key}' not found")))?;

    let session = state.sessions.resume_or_create(&headers).await;
    state
        .sessions
        .update(session.id, |s| s.input_text = preset.description.to_string())
        .await;

    Ok(redirect_home(session.id))
}

/// POST /generate
pub async fn handle_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<GenerateForm>,
) -> Response {
    let session = state.sessions.resume_or_create(&headers).await;
    let id = session.id;

    let llm = match state.llm() {
        Ok(llm) => llm,
        Err(_) => {
            state
                .sessions
                .update(id, |s| s.flash = Some(Flash::warning(MISSING_KEY_MESSAGE)))
                .await;
            return redirect_home(id);
        }
    };

    state
        .sessions
        .update(id, |s| s.input_text = form.user_input.clone())
        .await;

    let outcome = generate_pack(llm, &form.user_input).await;

    let applied = state
        .sessions
        .update(id, |s| match outcome {
            Ok(pack) => {
                s.pack = Some(pack);
                s.flash = None;
            }
            Err(e) => {
                warn!("Generation failed for session {id}: {e}");
                s.flash = Some(Flash::error(GENERATION_FAILED_MESSAGE));
            }
        })
        .await;
    if !applied {
        debug!("Session {id} expired during generation; result dropped");
    }

    redirect_home(id)
}

/// POST /pack
///
/// Saves manual edits to the three fields and the rewrite instruction.
pub async fn handle_save_pack(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PackForm>,
) -> Response {
    let session = state.sessions.resume_or_create(&headers).await;
    state
        .sessions
        .update(session.id, |s| {
            s.pack = Some(form.pack());
            s.rewrite_instruction = form.instruction.clone();
            s.flash = Some(Flash::info("Edits saved."));
        })
        .await;

    redirect_home(session.id)
}

/// POST /rewrite
///
/// Saves the submitted fields, then replaces the lyrics with the model's rewrite.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PackForm>,
) -> Response {
    let session = state.sessions.resume_or_create(&headers).await;
    let id = session.id;

    state
        .sessions
        .update(id, |s| {
            s.pack = Some(form.pack());
            s.rewrite_instruction = form.instruction.clone();
        })
        .await;

    let llm = match state.llm() {
        Ok(llm) => llm,
        Err(_) => {
            state
                .sessions
                .update(id, |s| s.flash = Some(Flash::warning(MISSING_KEY_MESSAGE)))
                .await;
            return redirect_home(id);
        }
    };

    let outcome = rewrite_lyrics(llm, &form.lyrics, &form.instruction).await;

    state
        .sessions
        .update(id, |s| match outcome {
            Ok(lyrics) => {
                if let Some(pack) = s.pack.as_mut() {
                    pack.lyrics = lyrics;
                }
                s.flash = None;
            }
            Err(e) => {
                warn!("Rewrite failed for session {id}: {e}");
                s.flash = Some(Flash::error(REWRITE_FAILED_MESSAGE));
            }
        })
        .await;

    redirect_home(id)
}
