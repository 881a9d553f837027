//! Text areas that grow and shrink with their content.

use log::error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlTextAreaElement};

use crate::dom::elements_by_class;
use crate::dom::events::listen;

/// Sets the height of `textarea` to its scroll height.
///
/// With `reset` the explicit height is cleared before measuring so the
/// element can shrink as well as grow.
pub fn fit_to_content(textarea: &HtmlTextAreaElement, reset: bool) {
    let style = textarea.style();
    if reset {
        let _ = style.remove_property("height");
    }
    let scroll_height = textarea.scroll_height();
    let _ = style.set_property("height", &format!("{}px", scroll_height));
}

/// Text areas carrying `class`. Other elements with the class are skipped.
pub fn expandable_textareas(document: &Document, class: &str) -> Vec<HtmlTextAreaElement> {
    elements_by_class(document, class)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
        .collect()
}

/// Sizes every expandable text area once the content is loaded and again on
/// every input. Returns how many text areas were wired.
pub fn expand_textareas(document: &Document, class: &str) -> usize {
    let textareas = expandable_textareas(document, class);

    for textarea in &textareas {
        let target = textarea.clone();
        if let Err(err) = listen(textarea, "input", move |_| fit_to_content(&target, true)) {
            error!("cannot listen for textarea input: {:?}", err);
        }
    }

    if document.ready_state() == "loading" {
        let initial = textareas.clone();
        let result = listen(document, "DOMContentLoaded", move |_| {
            initial.iter().for_each(|textarea| fit_to_content(textarea, false));
        });
        if let Err(err) = result {
            error!("cannot listen for DOMContentLoaded: {:?}", err);
        }
    } else {
        textareas
            .iter()
            .for_each(|textarea| fit_to_content(textarea, false));
    }

    textareas.len()
}
