//! Lyric Rewriter — applies a free-text edit instruction to existing lyrics.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, NO_CHATTER_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::pack::prompts::REWRITE_PROMPT_TEMPLATE;

pub fn build_rewrite_prompt(lyrics: &str, instruction: &str) -> String {
    fill_template(
        REWRITE_PROMPT_TEMPLATE,
        &[
            ("no_chatter", NO_CHATTER_INSTRUCTION),
            ("lyrics", lyrics),
            ("instruction", instruction),
        ],
    )
}

/// Returns the model's rewritten lyrics, trimmed. The text is not validated:
/// whatever comes back becomes the new lyrics.
pub async fn rewrite_lyrics(
    llm: &dyn TextGenerator,
    lyrics: &str,
    instruction: &str,
) -> Result<String, AppError> {
    let prompt = build_rewrite_prompt(lyrics, instruction);
    let reply = llm.generate(&prompt).await?;
    let rewritten = reply.trim().to_string();

    info!(
        "Lyrics rewritten: {} -> {} chars",
        lyrics.chars().count(),
        rewritten.chars().count()
    );
    Ok(rewritten)
}
