//! Server-side HTML rendering for the single-page studio.

use std::fmt::Write;

use crate::pack::models::{PromptPack, PRESETS};
use crate::session::{Flash, FlashLevel};
use crate::ui::copy_button::{copy_button, escape_html, textarea_body, COPY_SCRIPT};

pub const SUNO_URL: &str = "https://suno.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Create,
    Studio,
}

impl Tab {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("studio") => Tab::Studio,
            _ => Tab::Create,
        }
    }
}

/// Everything the page needs from the session, borrowed for one render.
pub struct PageView<'a> {
    pub tab: Tab,
    pub input_text: &'a str,
    pub pack: Option<&'a PromptPack>,
    pub rewrite_instruction: &'a str,
    pub flash: Option<&'a Flash>,
    pub degraded: bool,
}

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem; overflow-x: hidden; color: #222; }
nav a { margin-right: 1rem; padding: .4rem .8rem; border-radius: 5px; text-decoration: none; color: #333; }
nav a.active { background: #ffe8e8; font-weight: bold; }
textarea { width: 100%; box-sizing: border-box; font-size: 15px; padding: .5rem; }
.row { display: flex; gap: 1rem; flex-wrap: wrap; }
.col { flex: 1 1 320px; }
.col-wide { flex: 3 1 420px; }
.col-narrow { flex: 2 1 280px; }
.presets form { display: inline; }
.presets button { min-width: 8rem; }
button { cursor: pointer; border-radius: 5px; padding: 6px 12px; border: 1px solid #ccc; background: #fff; }
button.primary { background: #ff4b4b; color: #fff; border-color: #ff4b4b; font-weight: bold; }
.copy-btn { width: 98%; margin-top: 5px; font-weight: bold; display: flex; align-items: center; justify-content: center; gap: 8px; transition: all .2s ease; }
.copy-btn:hover { background: #f0f0f0; border-color: #999; }
.copy-btn.copied { background: #e6fffa; border-color: #38a169; }
.flash { padding: .6rem 1rem; border-radius: 5px; margin: .8rem 0; }
.flash.info { background: #e8f4ff; }
.flash.warning { background: #fff6d6; }
.flash.error { background: #ffe3e3; }
.suno-link { display: block; text-align: center; padding: .6rem; border: 1px solid #ccc; border-radius: 5px; text-decoration: none; color: #222; font-weight: bold; }
#busy { display: none; margin: .5rem 0; font-weight: bold; }
@media (max-width: 640px) { .copy-btn { font-size: 16px; padding: 10px; } }
</style>"#;

/// Disables buttons and shows the busy line while a form round trip is in flight.
const BUSY_SCRIPT: &str = r#"<script>
document.addEventListener('submit', function () {
  document.getElementById('busy').style.display = 'block';
  setTimeout(function () {
    document.querySelectorAll('button').forEach(function (b) { b.disabled = true; });
  }, 0);
});
</script>"#;

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str(
        "<!DOCTYPE html><html lang=\"ja\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>J-Suno Tool</title>",
    );
    html.push_str(STYLE);
    html.push_str("</head><body>");
    html.push_str("<h1>🎵 J-Suno Tool</h1><p><small>AI Music Prompt Generator &amp; Studio</small></p>");
    html.push_str(
        "<p><strong>Turn the song in your head into Suno-ready English style tags, \
         a title, and structured lyrics.</strong></p>",
    );

    let (create_class, studio_class) = match view.tab {
        Tab::Create => ("active", ""),
        Tab::Studio => ("", "active"),
    };
    let _ = write!(
        html,
        "<nav><a href=\"/\" class=\"{create_class}\">📝 Create a recipe</a>\
         <a href=\"/?tab=studio\" class=\"{studio_class}\">🚀 Coming updates</a></nav>"
    );

    if let Some(flash) = view.flash {
        render_flash(&mut html, flash);
    }
    html.push_str("<div id=\"busy\">⏳ The AI producer is thinking...</div>");

    match view.tab {
        Tab::Create => render_create_tab(&mut html, view),
        Tab::Studio => render_studio_tab(&mut html),
    }

    html.push_str(COPY_SCRIPT);
    html.push_str(BUSY_SCRIPT);
    html.push_str("</body></html>");
    html
}

fn render_flash(html: &mut String, flash: &Flash) {
    let (class, icon) = match flash.level {
        FlashLevel::Info => ("info", "💡"),
        FlashLevel::Warning => ("warning", "⚠️"),
        FlashLevel::Error => ("error", "❌"),
    };
    let _ = write!(
        html,
        "<div class=\"flash {class}\" role=\"alert\">{icon} {}</div>",
        escape_html(&flash.message)
    );
}

fn render_create_tab(html: &mut String, view: &PageView<'_>) {
    html.push_str("<section><h3>1. Describe your song</h3>");
    if view.degraded {
        html.push_str(
            "<div class=\"flash warning\">⚠️ No API key configured. \
             Generation is disabled until GEMINI_API_KEY is set.</div>",
        );
    }

    html.push_str("<p><small>⚡ Try a popular style</small></p><div class=\"presets\">");
    for preset in &PRESETS {
        let _ = write!(
            html,
            "<form method=\"post\" action=\"/presets/{key}\">\
             <button type=\"submit\" title=\"{title}\">{label}</button></form> ",
            key = preset.key,
            title = escape_html(preset.description),
            label = escape_html(preset.label),
        );
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/generate\" class=\"row\">\
         <div class=\"col-wide\"><textarea name=\"user_input\" id=\"main_input_area\" rows=\"3\" \
         placeholder=\"e.g. A stylish Lo-fi HipHop track for a night drive\">{}</textarea></div>\
         <div class=\"col-narrow\"><button type=\"submit\" class=\"primary\">🚀 Generate</button></div>\
         </form></section><hr>",
        textarea_body(view.input_text)
    );

    if let Some(pack) = view.pack {
        render_pack(html, pack, view.rewrite_instruction);
    }
}

fn render_pack(html: &mut String, pack: &PromptPack, rewrite_instruction: &str) {
    html.push_str("<section><h3>2. Review &amp; copy</h3>");
    let _ = write!(
        html,
        "<a class=\"suno-link\" href=\"{SUNO_URL}\" target=\"_blank\" rel=\"noopener\">\
         🔥 Open Suno.com and start creating</a>\
         <p class=\"flash info\">💡 Copy the style, title and lyrics, then open Suno with the \
         button above. (A title is optional.)</p>"
    );

    html.push_str("<form method=\"post\" action=\"/pack\"><div class=\"row\">");
    render_field(html, "col", "🎹 Style", "style", "style_input", &pack.style, 3);
    render_field(html, "col", "🏷️ Title", "title", "title_input", &pack.title, 3);
    html.push_str("</div><div class=\"row\">");
    render_field(html, "col-wide", "🎤 Lyrics", "lyrics", "lyrics_input", &pack.lyrics, 22);

    let _ = write!(
        html,
        "<div class=\"col-narrow\"><p><small>🤖 AI rewrite</small></p>\
         <p class=\"flash info\">Describe what to change in the lyrics.</p>\
         <textarea name=\"instruction\" id=\"ai_rewrite_input\" rows=\"6\" \
         placeholder=\"e.g. Make the chorus more passionate\">{}</textarea>\
         <button type=\"submit\" formaction=\"/rewrite\" class=\"primary\">Rewrite lyrics</button> \
         <button type=\"submit\" formaction=\"/pack\">Save edits</button></div>",
        textarea_body(rewrite_instruction)
    );
    html.push_str("</div></form></section>");
}

fn render_field(
    html: &mut String,
    class: &str,
    caption: &str,
    name: &str,
    id: &str,
    value: &str,
    rows: u32,
) {
    let _ = write!(
        html,
        "<div class=\"{class}\"><p><small>{caption}</small></p>\
         <textarea name=\"{name}\" id=\"{id}\" rows=\"{rows}\">{}</textarea>{}</div>",
        textarea_body(value),
        copy_button(value, id),
    );
}

fn render_studio_tab(html: &mut String) {
    html.push_str(
        "<section><h2>🚧 AI Audio Studio (Coming Soon)</h2>\
         <p class=\"flash info\">Powerful editing tools are on the way.</p>\
         <h3>📅 Planned features</h3><ul>\
         <li><strong>Stem Separation</strong> (vocal extraction)</li>\
         <li><strong>Key &amp; Tempo Change</strong></li>\
         <li><strong>Audio Mastering</strong> (loudness boost)</li>\
         </ul><p>Stay tuned for the next big update!</p></section>",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::copy_button::{unescape_html_attr, NASTY};

    fn view<'a>(pack: Option<&'a PromptPack>) -> PageView<'a> {
        PageView {
            tab: Tab::Create,
            input_text: "",
            pack,
            rewrite_instruction: "",
            flash: None,
            degraded: false,
        }
    }

    #[test]
    fn test_create_tab_without_pack_has_presets_and_no_editors() {
        let html = render_page(&view(None));
        for preset in &PRESETS {
            assert!(html.contains(&format!("action=\"/presets/{}\"", preset.key)));
        }
        assert!(html.contains("action=\"/generate\""));
        assert!(!html.contains("lyrics_input"));
        assert!(!html.contains(SUNO_URL));
    }

    #[test]
    fn test_pack_renders_editors_copy_buttons_and_link() {
        let pack = PromptPack {
            style: "lofi, chill".to_string(),
            title: "Midnight <Drive>".to_string(),
            lyrics: "[Intro]\n...".to_string(),
        };
        let html = render_page(&view(Some(&pack)));
        assert!(html.contains("Midnight &lt;Drive&gt;"));
        assert!(!html.contains("Midnight <Drive>"));
        assert_eq!(html.matches("class=\"copy-btn\"").count(), 3);
        assert!(html.contains(SUNO_URL));
        assert!(html.contains("formaction=\"/rewrite\""));
    }

    /// What a browser would hand to `field.value` for the textarea `id`.
    fn field_value(html: &str, id: &str) -> String {
        let open = format!("id=\"{id}\"");
        let start = html.find(&open).unwrap();
        let body_start = start + html[start..].find('>').unwrap() + 1;
        let body_len = html[body_start..].find("</textarea>").unwrap();
        let body = &html[body_start..body_start + body_len];
        unescape_html_attr(body.strip_prefix('\n').unwrap_or(body))
    }

    #[test]
    fn test_copied_field_values_match_pack_exactly() {
        let pack = PromptPack {
            style: NASTY.to_string(),
            title: "\nStarts with a break".to_string(),
            lyrics: "\r\n[Verse]\r\nback\\slash \"quoted\"\n".to_string(),
        };
        let mut v = view(Some(&pack));
        v.input_text = "\n\nlofi";
        v.rewrite_instruction = NASTY;
        let html = render_page(&v);

        assert_eq!(field_value(&html, "style_input"), pack.style);
        assert_eq!(field_value(&html, "title_input"), pack.title);
        assert_eq!(field_value(&html, "lyrics_input"), pack.lyrics);
        assert_eq!(field_value(&html, "main_input_area"), "\n\nlofi");
        assert_eq!(field_value(&html, "ai_rewrite_input"), NASTY);
    }

    #[test]
    fn test_input_text_cannot_break_out_of_textarea() {
        let mut v = view(None);
        v.input_text = "</textarea><script>x()</script>";
        let html = render_page(&v);
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_flash_and_degraded_banner() {
        let flash = Flash::error("Generation failed.");
        let mut v = view(None);
        v.flash = Some(&flash);
        v.degraded = true;
        let html = render_page(&v);
        assert!(html.contains("flash error"));
        assert!(html.contains("Generation failed."));
        assert!(html.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_studio_tab_is_placeholder() {
        let mut v = view(None);
        v.tab = Tab::Studio;
        let html = render_page(&v);
        assert!(html.contains("Coming Soon"));
        assert!(html.contains("Stem Separation"));
        assert!(!html.contains("action=\"/generate\""));
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(Tab::from_query(Some("studio")), Tab::Studio);
        assert_eq!(Tab::from_query(Some("nope")), Tab::Create);
        assert_eq!(Tab::from_query(None), Tab::Create);
    }
}
