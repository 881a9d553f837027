//! In-place highlighting of JSON rendered by the server into `json-code`
//! blocks.

use common::highlight::highlight_json_text;
use log::warn;
use web_sys::Document;

use crate::dom::elements_by_class;

/// Replaces the JSON text of every element carrying `class` with its
/// highlighted HTML. Blocks that do not hold valid JSON are left as they are.
///
/// Returns how many blocks were highlighted.
pub fn format_all_json(document: &Document, class: &str) -> usize {
    let mut formatted = 0;
    for element in elements_by_class(document, class) {
        let raw = element.text_content().unwrap_or_default();
        match highlight_json_text(&raw) {
            Ok(html) => {
                element.set_inner_html(&html);
                formatted += 1;
            }
            Err(err) => warn!("leaving invalid JSON block untouched: {}", err),
        }
    }
    formatted
}
