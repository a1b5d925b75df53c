//! Pack Generator — turns a free-text song description into a `PromptPack`.
//!
//! Flow: fill prompt template → LLM (structured output requested) →
//!       locate the JSON object in the reply → parse into `PromptPack`.
//!
//! Every failure is an explicit `PackError` variant; nothing here panics on
//! model output.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION, SUNO_EXPERT_PERSONA};
use crate::llm_client::{LlmError, TextGenerator};
use crate::pack::models::PromptPack;
use crate::pack::prompts::PACK_PROMPT_TEMPLATE;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("no JSON object found in model response")]
    NoJsonObject,

    #[error("JSON object did not parse as a prompt pack: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Greedy: first `{` through the last `}`, across newlines.
fn json_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static regex is valid"))
}

/// Builds the generation prompt for a user's song description.
pub fn build_pack_prompt(user_request: &str) -> String {
    fill_template(
        PACK_PROMPT_TEMPLATE,
        &[
            ("persona", SUNO_EXPERT_PERSONA),
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("user_request", user_request),
        ],
    )
}

/// Returns the substring from the first `{` to the last `}`, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    json_object_pattern().find(text).map(|m| m.as_str())
}

/// Parses a raw model reply into a `PromptPack`. Fails closed.
pub fn parse_pack_response(text: &str) -> Result<PromptPack, PackError> {
    if text.trim().is_empty() {
        return Err(PackError::EmptyResponse);
    }
    let object = extract_json_object(text).ok_or(PackError::NoJsonObject)?;
    Ok(serde_json::from_str(object)?)
}

/// Asks the model for a prompt pack describing `user_request`.
pub async fn generate_pack(
    llm: &dyn TextGenerator,
    user_request: &str,
) -> Result<PromptPack, PackError> {
    let prompt = build_pack_prompt(user_request);
    let reply = llm
        .generate_json(&prompt, &PromptPack::response_schema())
        .await?;

    match parse_pack_response(&reply) {
        Ok(pack) => {
            info!(
                "Prompt pack generated: title_chars={}, lyrics_chars={}",
                pack.title.chars().count(),
                pack.lyrics.chars().count()
            );
            Ok(pack)
        }
        Err(e) => {
            warn!("Could not parse prompt pack from {} byte reply: {e}", reply.len());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::RecordingGenerator;

    #[test]
    fn test_extract_ignores_surrounding_text() {
        let text = "Sure! Here it is:\n{\"a\": 1}\nEnjoy.";
        assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_is_greedy_across_nested_objects_and_newlines() {
        let text = "x {\"a\": {\"b\": 1},\n\"c\": 2} y";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1},\n\"c\": 2}"));
    }

    #[test]
    fn test_extract_none_without_braces() {
        assert_eq!(extract_json_object("no object here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn test_parse_handles_code_fences() {
        let text = "```json\n{\"style\": \"pop\", \"title\": \"T\", \"lyrics\": \"[Verse]\"}\n```";
        let pack = parse_pack_response(text).unwrap();
        assert_eq!(pack.style, "pop");
        assert_eq!(pack.lyrics, "[Verse]");
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(matches!(parse_pack_response("  \n"), Err(PackError::EmptyResponse)));
    }

    #[test]
    fn test_parse_no_object() {
        assert!(matches!(
            parse_pack_response("I cannot help with that."),
            Err(PackError::NoJsonObject)
        ));
    }

    #[test]
    fn test_parse_malformed_object() {
        assert!(matches!(
            parse_pack_response("{\"style\": \"pop\", }"),
            Err(PackError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let pack = parse_pack_response("{\"style\": \"pop\"}").unwrap();
        assert_eq!(pack.style, "pop");
        assert_eq!(pack.title, "");
    }

    #[test]
    fn test_prompt_embeds_request_and_keeps_format_example() {
        let prompt = build_pack_prompt("夜のドライブ {title}");
        assert!(prompt.contains("夜のドライブ {title}"));
        assert!(prompt.contains("\"lyrics\": \"[Intro]\\n...\""));
        assert!(prompt.contains(JSON_ONLY_INSTRUCTION));
    }

    #[tokio::test]
    async fn test_lofi_scenario_returns_exact_pack() {
        let llm = RecordingGenerator::replying(
            r#"Here you go: {"style":"lofi, chill, jazzy","title":"Midnight Drive","lyrics":"[Intro]\n..."}"#,
        );

        let pack = generate_pack(&llm, "おしゃれなLo-fi HipHop").await.unwrap();

        assert_eq!(
            pack,
            PromptPack {
                style: "lofi, chill, jazzy".to_string(),
                title: "Midnight Drive".to_string(),
                lyrics: "[Intro]\n...".to_string(),
            }
        );
        assert!(llm.prompts()[0].contains("おしゃれなLo-fi HipHop"));
    }

    #[tokio::test]
    async fn test_empty_request_is_still_sent() {
        let llm = RecordingGenerator::replying(r#"{"style":"pop","title":"T","lyrics":"L"}"#);
        assert!(generate_pack(&llm, "").await.is_ok());
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_model_failure_is_llm_error() {
        let llm = RecordingGenerator::failing();
        assert!(matches!(
            generate_pack(&llm, "anything").await,
            Err(PackError::Llm(_))
        ));
    }
}
