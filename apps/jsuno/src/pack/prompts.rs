// All LLM prompt constants for the pack module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Pack generation prompt template.
/// Replace: {persona}, {json_only}, {user_request}
pub const PACK_PROMPT_TEMPLATE: &str = r#"{persona}

The user describes the song they want:
{user_request}

Produce a Suno prompt pack as a JSON object with EXACTLY these three fields:
1. "style": Suno "Style of Music" tags in English, comma separated (genre, vibe, instruments, vocals).
2. "title": the song title.
3. "lyrics": full-length lyrics with structure tags such as [Intro], [Verse], [Pre-Chorus], [Chorus], [Bridge], [Outro] written inline, one tag per line.

Write the title and lyrics in the language of the user's request.
If the request is empty, invent a catchy pop song.

Output format:
{
  "style": "Genre, Vibe, Instruments",
  "title": "Title Name",
  "lyrics": "[Intro]\n..."
}

{json_only}"#;

/// Lyric rewrite prompt template.
/// Replace: {no_chatter}, {lyrics}, {instruction}
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"You are a lyric editing machine. Apply the edit instruction to the lyrics below.
Keep every structure tag (such as [Verse] or [Chorus]) unless the instruction says otherwise.
If the instruction is empty, return the lyrics unchanged.
{no_chatter}
Return only the full revised lyrics.

LYRICS:
{lyrics}

EDIT INSTRUCTION:
{instruction}"#;
