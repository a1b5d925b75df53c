//! Copy-to-clipboard control and the HTML escaping it depends on.
//!
//! Text never enters a script body. The button carries it in a `data-copy`
//! attribute and one page-level handler hands `dataset.copy` (or the live
//! value of the bound field) to the browser clipboard API.

/// Escapes text for an HTML element body.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders `text` as a `<textarea>` body. The parser drops one LF right after
/// the start tag and folds CR LF into LF, so a guard LF is written first and
/// carriage returns go out as references.
pub fn textarea_body(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    out.push('\n');
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text for a double-quoted attribute value. Line breaks become
/// character references so attribute-value normalization cannot alter them.
pub fn escape_html_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a copy button for `text`. When `target_id` names a field on the
/// page, the button copies that field's current value instead, so unsaved
/// edits are what lands on the clipboard.
pub fn copy_button(text: &str, target_id: &str) -> String {
    format!(
        r#"<button type="button" id="copy_{id}" class="copy-btn" data-target="{id}" data-copy="{payload}"><span>📄</span> Copy to Clipboard</button>"#,
        id = escape_html_attr(target_id),
        payload = escape_html_attr(text),
    )
}

/// Page-level handler shared by every copy button.
pub const COPY_SCRIPT: &str = r#"<script>
document.addEventListener('click', function (event) {
  const btn = event.target.closest('.copy-btn');
  if (!btn) return;
  const field = btn.dataset.target ? document.getElementById(btn.dataset.target) : null;
  const text = field ? field.value : btn.dataset.copy;
  navigator.clipboard.writeText(text).then(function () {
    btn.textContent = '✅ Copied!';
    btn.classList.add('copied');
    setTimeout(function () {
      btn.innerHTML = '<span>📄</span> Copy to Clipboard';
      btn.classList.remove('copied');
    }, 3000);
  });
});
</script>"#;

/// Minimal decoder for the references this module emits, standing in for the
/// browser's parser.
#[cfg(test)]
pub(crate) fn unescape_html_attr(text: &str) -> String {
    text.replace("&#10;", "\n")
        .replace("&#13;", "\r")
        .replace("&#9;", "\t")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

#[cfg(test)]
pub(crate) const NASTY: &str =
    "He said \"hi\" & 'bye'\n\\n is not a newline\r\n</button><script>alert(1)</script>\ttab";
