//! Keeps the form state in step with the tracked fields and re-renders the
//! highlighted state after every update.

use std::rc::Rc;

use log::{debug, error};

use crate::highlight::format_json_code;
use crate::model::field::TrackedField;
use crate::model::form_state::SharedFormState;
use crate::ui::{FieldSource, FormEvents, StateDisplay};

pub struct FormStateSync<D> {
    state: SharedFormState,
    display: D,
}

impl<D: StateDisplay> FormStateSync<D> {
    pub fn new(state: SharedFormState, display: D) -> Self {
        Self { state, display }
    }

    pub fn state(&self) -> &SharedFormState {
        &self.state
    }

    /// Applies a change event from a single field and re-renders.
    pub fn field_changed(&self, field: &TrackedField) -> serde_json::Result<()> {
        self.state.borrow_mut().apply(field);
        debug!(
            "field {:?} {}",
            field.name,
            if field.has_value() { "set" } else { "cleared" }
        );
        self.render()
    }

    /// Re-seeds the state from the fields present when the page loaded, then
    /// renders once.
    ///
    /// Only filled fields are written. An empty field leaves whatever the
    /// state already holds under its name. With duplicate names the last
    /// field wins.
    pub fn page_loaded<I>(&self, fields: I) -> serde_json::Result<()>
    where
        I: IntoIterator<Item = TrackedField>,
    {
        {
            let mut state = self.state.borrow_mut();
            for field in fields.into_iter().filter(TrackedField::has_value) {
                state.insert(&field.name, &field.value);
            }
            debug!("form state seeded with {} fields", state.len());
        }
        self.render()
    }

    /// Renders the current state into the display.
    pub fn render(&self) -> serde_json::Result<()> {
        let html = format_json_code(&*self.state.borrow())?;
        self.display.show_state_html(&html);
        Ok(())
    }
}

impl<D: StateDisplay + 'static> FormStateSync<D> {
    /// Subscribes to load and change events.
    pub fn attach<E, S>(self: &Rc<Self>, events: &E, source: S)
    where
        E: FormEvents,
        S: FieldSource + 'static,
    {
        let sync = Rc::clone(self);
        events.on_load(Box::new(move || {
            if let Err(err) = sync.page_loaded(source.tracked_fields()) {
                error!("failed to render form state: {}", err);
            }
        }));

        let sync = Rc::clone(self);
        events.on_field_change(Box::new(move |field| {
            if let Err(err) = sync.field_changed(&field) {
                error!("failed to render form state: {}", err);
            }
        }));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::highlight::strip_markup;
    use crate::model::form_state::FormState;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    pub(crate) struct Screen {
        pub(crate) renders: Rc<RefCell<Vec<String>>>,
    }

    impl Screen {
        pub(crate) fn last(&self) -> String {
            self.renders.borrow().last().cloned().unwrap_or_default()
        }

        pub(crate) fn count(&self) -> usize {
            self.renders.borrow().len()
        }
    }

    impl StateDisplay for Screen {
        fn show_state_html(&self, html: &str) {
            self.renders.borrow_mut().push(html.to_string());
        }
    }

    #[derive(Default)]
    pub(crate) struct EventBus {
        load: RefCell<Vec<Box<dyn FnMut()>>>,
        change: RefCell<Vec<Box<dyn FnMut(TrackedField)>>>,
        submit: RefCell<Vec<Box<dyn FnMut()>>>,
    }

    impl EventBus {
        pub(crate) fn fire_load(&self) {
            for handler in self.load.borrow_mut().iter_mut() {
                handler();
            }
        }

        pub(crate) fn fire_change(&self, name: &str, value: &str) {
            for handler in self.change.borrow_mut().iter_mut() {
                handler(TrackedField::new(name, value));
            }
        }

        pub(crate) fn fire_submit(&self) {
            for handler in self.submit.borrow_mut().iter_mut() {
                handler();
            }
        }
    }

    impl FormEvents for EventBus {
        fn on_load(&self, handler: Box<dyn FnMut()>) {
            self.load.borrow_mut().push(handler);
        }

        fn on_field_change(&self, handler: Box<dyn FnMut(TrackedField)>) {
            self.change.borrow_mut().push(handler);
        }

        fn on_submit(&self, handler: Box<dyn FnMut()>) {
            self.submit.borrow_mut().push(handler);
        }
    }

    /// Fields as the page shows them at load time.
    struct Fields(Vec<TrackedField>);

    impl FieldSource for Fields {
        fn tracked_fields(&self) -> Vec<TrackedField> {
            self.0.clone()
        }
    }

    fn rendered_value(screen: &Screen) -> serde_json::Value {
        serde_json::from_str(&strip_markup(&screen.last())).unwrap()
    }

    #[test]
    fn change_sets_state_and_renders_highlighted_json() {
        let screen = Screen::default();
        let sync = FormStateSync::new(FormState::new().into_shared(), screen.clone());

        sync.field_changed(&TrackedField::new("title", "Algebra")).unwrap();

        assert_eq!(sync.state().borrow().to_json().unwrap(), r#"{"title":"Algebra"}"#);
        assert_eq!(
            screen.last(),
            "<span class=\"brackets\">{</span>\n  <span class=\"keys\">\"title\"</span>: \"Algebra\"\n<span class=\"brackets\">}</span>"
        );
    }

    #[test]
    fn state_tracks_exactly_the_filled_fields() {
        let screen = Screen::default();
        let sync = FormStateSync::new(FormState::new().into_shared(), screen.clone());

        let events = [
            ("title", "Algebra"),
            ("lang", "ru"),
            ("title", "Geometry"),
            ("lang", ""),
            ("hours", "36"),
            ("hours", ""),
            ("hours", "72"),
        ];
        for (name, value) in events {
            sync.field_changed(&TrackedField::new(name, value)).unwrap();
            assert_eq!(rendered_value(&screen), serde_json::to_value(&*sync.state().borrow()).unwrap());
        }

        assert_eq!(rendered_value(&screen), json!({"title": "Geometry", "hours": "72"}));
        assert_eq!(screen.count(), events.len());
    }

    #[test]
    fn load_seeds_filled_fields_and_renders_once() {
        let screen = Screen::default();
        let initial = FormState::from_json(r#"{"title":"Draft","hours":36}"#).unwrap();
        let sync = FormStateSync::new(initial.into_shared(), screen.clone());

        sync.page_loaded(vec![
            TrackedField::new("title", "Algebra"),
            TrackedField::new("hours", ""),
            TrackedField::new("lang", "ru"),
            TrackedField::new("lang", "en"),
        ])
        .unwrap();

        assert_eq!(screen.count(), 1);
        assert_eq!(
            rendered_value(&screen),
            json!({"title": "Algebra", "hours": 36, "lang": "en"})
        );
    }

    #[test]
    fn attach_wires_load_and_change_events() {
        let screen = Screen::default();
        let bus = EventBus::default();
        let sync = Rc::new(FormStateSync::new(FormState::new().into_shared(), screen.clone()));
        sync.attach(&bus, Fields(vec![TrackedField::new("title", "Algebra")]));

        assert_eq!(screen.count(), 0);
        bus.fire_load();
        assert_eq!(rendered_value(&screen), json!({"title": "Algebra"}));

        bus.fire_change("title", "");
        assert!(sync.state().borrow().is_empty());
        assert_eq!(rendered_value(&screen), json!({}));
    }
}
