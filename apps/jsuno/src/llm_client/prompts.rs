// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Persona shared by every prompt sent on behalf of the studio.
pub const SUNO_EXPERT_PERSONA: &str = "You are an expert producer for Suno AI, \
    the text-to-music service. You know which English style tags it responds to \
    and how it reads structure tags inside lyrics.";

/// Instruction appended when the response must be a bare JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Instruction appended when the response is consumed verbatim as text.
pub const NO_CHATTER_INSTRUCTION: &str = "Output ONLY the requested text. \
    No greetings, no explanations, no headings, no quotation marks around the result.";

/// Fills `{name}` placeholders in a single pass.
///
/// Substituted values are never re-scanned, so user text containing
/// `{lyrics}` or similar stays literal. Braces that do not name a known
/// placeholder (such as JSON examples) are copied through unchanged.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_placeholders() {
        let out = fill_template("a {x} b {y}", &[("x", "1"), ("y", "2")]);
        assert_eq!(out, "a 1 b 2");
    }

    #[test]
    fn test_fill_template_keeps_json_braces() {
        let out = fill_template("{\n  \"style\": \"{x}\"\n}", &[("x", "rock")]);
        assert_eq!(out, "{\n  \"style\": \"rock\"\n}");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let out = fill_template("{a}|{b}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(out, "{b}|B");
    }

    #[test]
    fn test_fill_template_unclosed_brace() {
        assert_eq!(fill_template("x { y", &[("y", "z")]), "x { y");
    }
}
