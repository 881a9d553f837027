//! Seams between the core and whatever renders the page.
//!
//! The browser binding implements these on top of the DOM; tests implement
//! them with recorders. Handlers are called from a single thread in the order
//! the page dispatches its events.

use std::future::Future;

use crate::model::field::TrackedField;
use crate::requests::{HttpReply, SubmitError, SubmitRequest};

/// Event subscription for the form page.
pub trait FormEvents {
    /// Runs once the page and its fields are loaded.
    fn on_load(&self, handler: Box<dyn FnMut()>);

    /// Runs whenever a tracked field commits a new value.
    fn on_field_change(&self, handler: Box<dyn FnMut(TrackedField)>);

    /// Runs when the form is submitted. Default navigation is already
    /// suppressed when the handler is called.
    fn on_submit(&self, handler: Box<dyn FnMut()>);
}

/// Read access to the tracked fields.
pub trait FieldSource {
    /// Current snapshot of every tracked field, in document order.
    fn tracked_fields(&self) -> Vec<TrackedField>;
}

/// Element showing the highlighted form state.
pub trait StateDisplay {
    fn show_state_html(&self, html: &str);
}

/// Feedback surface used around a submission.
pub trait SubmitFeedback {
    fn set_submit_enabled(&self, enabled: bool);

    /// Blocking notification shown to the user.
    fn alert(&self, message: &str);

    fn navigate(&self, url: &str);
}

/// Issues the POST for a submission. A single attempt, no retries.
pub trait Transport {
    fn post(&self, request: SubmitRequest) -> impl Future<Output = Result<HttpReply, SubmitError>>;
}
