//! DOM event subscription for the form page.
//!
//! Listeners are registered once for the lifetime of the page, so their
//! closures are leaked with `forget` instead of being stored somewhere.

use std::cell::RefCell;
use std::rc::Rc;

use common::model::field::TrackedField;
use common::ui::FormEvents;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use super::{elements_by_class, snapshot, DomPage};

/// Adds `callback` as a listener for `event` on `target`.
pub fn listen<F>(target: &EventTarget, event: &str, callback: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

impl FormEvents for DomPage {
    fn on_load(&self, mut handler: Box<dyn FnMut()>) {
        // The module is usually initialized after `load` has already fired.
        if self.document.ready_state() == "complete" {
            handler();
            return;
        }
        if let Err(err) = listen(&self.window, "load", move |_| handler()) {
            error!("cannot listen for page load: {:?}", err);
        }
    }

    fn on_field_change(&self, handler: Box<dyn FnMut(TrackedField)>) {
        let handler = Rc::new(RefCell::new(handler));
        for element in elements_by_class(&self.document, &self.config.value_class) {
            let handler = Rc::clone(&handler);
            let field = element.clone();
            let result = listen(&element, "change", move |_| match snapshot(&field) {
                Some(tracked) => (&mut *handler.borrow_mut())(tracked),
                None => warn!("ignoring change on a tracked element without name or value"),
            });
            if let Err(err) = result {
                error!("cannot listen for field changes: {:?}", err);
            }
        }
    }

    fn on_submit(&self, mut handler: Box<dyn FnMut()>) {
        let result = listen(&self.form, "submit", move |event: Event| {
            event.prevent_default();
            handler();
        });
        if let Err(err) = result {
            error!("cannot listen for form submission: {:?}", err);
        }
    }
}
