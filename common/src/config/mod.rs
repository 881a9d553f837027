use serde::{Deserialize, Serialize};

/// Names the page template uses for the elements the client binds to.
///
/// Every field falls back to its default, so a partial JSON object like
/// `{"submit_id": "save"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Class of `<pre>`/`<code>` blocks whose JSON content is highlighted in place.
    pub json_code_class: String,
    /// Class of text areas that grow with their content.
    pub expandable_class: String,
    /// Class of the fields tracked in the form state.
    pub value_class: String,
    /// Id of the element showing the highlighted form state.
    pub state_display_id: String,
    /// Id of the form whose submit event sends the state.
    pub form_id: String,
    /// Id of the submit control disabled while a request is in flight.
    pub submit_id: String,
    /// Maximum level forwarded to the browser console.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            json_code_class: "json-code".to_string(),
            expandable_class: "expandable".to_string(),
            value_class: "value".to_string(),
            state_display_id: "print_course_json".to_string(),
            form_id: "course_info_form".to_string(),
            submit_id: "send_course_info".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a configuration object. Blank input gives the defaults.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// `log_level` as a filter. Unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Where the form state is posted and the CSRF token to send along.
///
/// Both come from the page template, e.g. the course add or update URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub csrf_token: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            csrf_token: csrf_token.into(),
        }
    }
}
