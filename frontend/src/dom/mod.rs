//! DOM side of the form page: element lookup, field snapshots and the
//! `common::ui` implementations backed by `web-sys`.

pub mod events;

use common::config::PageConfig;
use common::model::field::TrackedField;
use common::ui::{FieldSource, StateDisplay, SubmitFeedback};
use log::warn;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::{
    Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window,
};

/// The elements the form client binds to, located once at startup.
pub struct DomPage {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
    pub form: Element,
    pub display: Element,
    pub submit: Element,
}

impl DomPage {
    /// Looks up the form, the state display and the submit control.
    ///
    /// Fails when the page has no window/document or when one of the three
    /// elements is missing.
    pub fn locate(config: PageConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| js_error("window has no document"))?;

        let form = element_by_id(&document, &config.form_id)?;
        let display = element_by_id(&document, &config.state_display_id)?;
        let submit = element_by_id(&document, &config.submit_id)?;

        Ok(Self {
            window,
            document,
            config,
            form,
            display,
            submit,
        })
    }

    pub fn state_display(&self) -> DomDisplay {
        DomDisplay {
            element: self.display.clone(),
        }
    }

    pub fn feedback(&self) -> DomFeedback {
        DomFeedback {
            window: self.window.clone(),
            submit: self.submit.clone(),
        }
    }

    pub fn fields(&self) -> DomFields {
        DomFields {
            document: self.document.clone(),
            value_class: self.config.value_class.clone(),
        }
    }
}

pub(crate) fn js_error(message: &str) -> JsValue {
    JsError::new(message).into()
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| js_error(&format!("missing element #{}", id)))
}

/// Elements carrying `class`, in document order.
pub fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

/// Current value of a form control, `None` for anything that has no value.
pub fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    element
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}

/// Name and value of a tracked control, `None` when either is missing.
pub fn snapshot(element: &Element) -> Option<TrackedField> {
    let name = element.get_attribute("name")?;
    let value = field_value(element)?;
    Some(TrackedField { name, value })
}

/// Reads the tracked fields straight from the document.
pub struct DomFields {
    document: Document,
    value_class: String,
}

impl FieldSource for DomFields {
    fn tracked_fields(&self) -> Vec<TrackedField> {
        elements_by_class(&self.document, &self.value_class)
            .iter()
            .filter_map(|element| {
                let field = snapshot(element);
                if field.is_none() {
                    warn!(
                        "skipping tracked <{}> without name or value",
                        element.tag_name().to_lowercase()
                    );
                }
                field
            })
            .collect()
    }
}

pub struct DomDisplay {
    element: Element,
}

impl StateDisplay for DomDisplay {
    fn show_state_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }
}

pub struct DomFeedback {
    window: Window,
    submit: Element,
}

impl SubmitFeedback for DomFeedback {
    fn set_submit_enabled(&self, enabled: bool) {
        let _ = self.submit.toggle_attribute_with_force("disabled", !enabled);
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn navigate(&self, url: &str) {
        let _ = self.window.location().set_href(url);
    }
}
