use serde::{Deserialize, Serialize};

/// Snapshot of a tracked form field taken when an event fires.
///
/// `name` comes from the element's `name` attribute and `value` from its
/// current `value` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedField {
    pub name: String,
    pub value: String,
}

impl TrackedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A field counts as filled when its value is not the empty string.
    /// Whitespace is a value.
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}
