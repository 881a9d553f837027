//! Browser entry points for the course information form.
//!
//! The page template loads this module and calls the exported functions:
//!
//! - `formatAllJson()` highlights JSON rendered into `json-code` blocks,
//! - `expandTextareas()` makes `expandable` text areas follow their content,
//! - `initCourseForm(url, csrfToken, initialState, config)` keeps the form
//!   state in sync with the `value` fields and posts it on submit.

use std::rc::Rc;

use common::config::{Endpoint, PageConfig};
use common::model::form_state::FormState;
use common::submission::SubmissionController;
use common::sync::FormStateSync;
use log::info;
use wasm_bindgen::prelude::*;

pub mod autosize;
pub mod dom;
pub mod json_code;
pub mod logger;
pub mod transport;

use dom::{js_error, DomDisplay, DomPage};
use transport::FetchTransport;

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| js_error("no document available"))
}

fn parse_config(config: Option<String>) -> Result<PageConfig, JsValue> {
    PageConfig::from_json(config.as_deref().unwrap_or_default())
        .map_err(|err| js_error(&format!("invalid page config: {}", err)))
}

/// Highlights any JSON-serializable JS value.
#[wasm_bindgen(js_name = formatJsonCode)]
pub fn format_json_code(value: &JsValue) -> Result<String, JsValue> {
    let text = js_sys::JSON::stringify(value)?
        .as_string()
        .ok_or_else(|| js_error("value is not JSON-serializable"))?;
    common::highlight::highlight_json_text(&text).map_err(|err| js_error(&err.to_string()))
}

/// Highlights every `json-code` block. Returns how many were formatted.
#[wasm_bindgen(js_name = formatAllJson)]
pub fn format_all_json(config: Option<String>) -> Result<usize, JsValue> {
    let config = parse_config(config)?;
    Ok(json_code::format_all_json(&document()?, &config.json_code_class))
}

/// Wires the auto-sizing of `expandable` text areas. Returns how many were found.
#[wasm_bindgen(js_name = expandTextareas)]
pub fn expand_textareas(config: Option<String>) -> Result<usize, JsValue> {
    let config = parse_config(config)?;
    Ok(autosize::expand_textareas(&document()?, &config.expandable_class))
}

/// Handle to a wired course form.
#[wasm_bindgen]
pub struct CourseForm {
    sync: Rc<FormStateSync<DomDisplay>>,
}

#[wasm_bindgen]
impl CourseForm {
    /// Current form state as compact JSON.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        self.sync
            .state()
            .borrow()
            .to_json()
            .map_err(|err| js_error(&err.to_string()))
    }

    /// Re-renders the state display.
    pub fn render(&self) -> Result<(), JsValue> {
        self.sync.render().map_err(|err| js_error(&err.to_string()))
    }
}

/// Binds the form state to the page.
///
/// `initial_state` is the JSON object the server rendered for the course, or
/// nothing for a blank form. `config` is an optional JSON `PageConfig`.
#[wasm_bindgen(js_name = initCourseForm)]
pub fn init_course_form(
    url: String,
    csrf_token: String,
    initial_state: Option<String>,
    config: Option<String>,
) -> Result<CourseForm, JsValue> {
    let config = parse_config(config)?;
    console_error_panic_hook::set_once();
    logger::init(config.level_filter());

    let state = FormState::from_json(initial_state.as_deref().unwrap_or_default())
        .map_err(|err| js_error(&format!("invalid initial state: {}", err)))?;
    let page = DomPage::locate(config)?;

    let sync = Rc::new(FormStateSync::new(state.into_shared(), page.state_display()));
    sync.attach(&page, page.fields());

    let controller = Rc::new(SubmissionController::new(
        Rc::clone(&sync),
        Endpoint::new(url, csrf_token),
        page.feedback(),
        FetchTransport,
    ));
    controller.attach(&page, |task| wasm_bindgen_futures::spawn_local(task));

    info!("course form bound to {}", controller.endpoint().url);
    Ok(CourseForm { sync })
}
