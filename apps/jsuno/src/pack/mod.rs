// Prompt pack engine: generation, lyric rewrite, presets, and the JSON API.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod rewriter;
