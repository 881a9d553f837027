//! JSON to HTML syntax highlighting.
//!
//! The output is pretty-printed JSON with two-space indentation where:
//!
//! - `<` and `>` are replaced by `&lt;` and `&gt;`,
//! - every quoted key followed by `:` is wrapped in `<span class="keys">`,
//! - every one of `{ } [ ] ( )` is wrapped in `<span class="brackets">`.
//!
//! Escaping happens before any markup is injected, and brackets are wrapped
//! after keys. The span markup contains neither brackets nor unescaped text,
//! so later passes never touch it.
//!
//! The passes are plain regular expressions, not a JSON tokenizer, so brackets
//! inside string values get highlighted as well.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const KEYS_CLASS: &str = "keys";
pub const BRACKETS_CLASS: &str = "brackets";

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"("[0-9A-Za-z_]*"):"#).expect("key pattern is valid"));

static BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{}\[\]()]").expect("bracket pattern is valid"));

/// Serializes `value` and returns its highlighted HTML.
///
/// Fails only when `value` cannot be serialized to JSON (e.g. a map with
/// non-string keys).
pub fn format_json_code<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let pretty = serde_json::to_string_pretty(value)?;
    Ok(highlight_pretty(&pretty))
}

/// Parses raw JSON text and returns its highlighted HTML.
///
/// Used for `json-code` blocks whose content is JSON rendered by the server.
pub fn highlight_json_text(raw: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    format_json_code(&value)
}

fn highlight_pretty(pretty: &str) -> String {
    let escaped = pretty.replace('<', "&lt;").replace('>', "&gt;");
    let keyed = KEY_RE.replace_all(
        &escaped,
        format!(r#"<span class="{KEYS_CLASS}">$1</span>:"#).as_str(),
    );
    BRACKET_RE
        .replace_all(
            &keyed,
            format!(r#"<span class="{BRACKETS_CLASS}">$0</span>"#).as_str(),
        )
        .into_owned()
}

/// Removes the span markup and undoes the angle bracket escaping, giving back
/// the pretty-printed JSON.
pub fn strip_markup(html: &str) -> String {
    static TAG_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"</?span[^>]*>"#).expect("tag pattern is valid"));
    TAG_RE
        .replace_all(html, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}
