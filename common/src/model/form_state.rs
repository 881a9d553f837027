use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::field::TrackedField;

/// In-memory mapping from field name to field value, the data that gets
/// submitted to the server.
///
/// Keys keep their insertion order, so the rendered JSON lists fields in the
/// order they were first filled in. Overwriting a key keeps its position and
/// removing one leaves the others in place.
///
/// Values written from form fields are always strings. A state seeded from the
/// server (see [`FormState::from_json`]) may carry arbitrary JSON values, which
/// stay untouched until a field with the same name overwrites them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    fields: Map<String, Value>,
}

/// Form state shared between the synchronizer and the submission controller.
///
/// Everything runs on the browser's event loop, so a `RefCell` is enough. Never
/// hold a borrow across an `.await`.
pub type SharedFormState = Rc<RefCell<FormState>>;

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a server-supplied JSON object into a state.
    ///
    /// `null` and an empty string both give an empty state, so templates can
    /// render a missing value without special casing it.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::new());
        }
        serde_json::from_str(trimmed)
    }

    pub fn into_shared(self) -> SharedFormState {
        Rc::new(RefCell::new(self))
    }

    /// Applies a field snapshot: a non-empty value is stored under the field
    /// name, an empty one removes the name from the state.
    pub fn apply(&mut self, field: &TrackedField) {
        if field.has_value() {
            self.insert(&field.name, &field.value);
        } else {
            self.remove(&field.name);
        }
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields
            .insert(name.to_string(), Value::String(value.to_string()));
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the value under `name` when it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Compact JSON, used as the request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.fields)
    }
}
