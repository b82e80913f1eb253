use dioxus::prelude::*;
use form_types::{FieldSnapshot, FormState, FormStateContainer};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

use crate::form::FormContext;

/// Form-state double that applies writes to a plain `FormState` and records
/// every value write in order.
#[derive(Default)]
pub(crate) struct RecordingForm {
    state: RefCell<FormState>,
    writes: RefCell<Vec<(String, Value)>>,
    touches: RefCell<Vec<(String, bool)>>,
}

impl RecordingForm {
    pub(crate) fn new(state: FormState) -> Self {
        Self {
            state: RefCell::new(state),
            ..Self::default()
        }
    }

    pub(crate) fn with(values: Value, touched: Value, errors: Value) -> Self {
        Self::new(FormState {
            touched,
            errors,
            ..FormState::new(values)
        })
    }

    pub(crate) fn writes(&self) -> Vec<(String, Value)> {
        self.writes.borrow().clone()
    }

    pub(crate) fn touches(&self) -> Vec<(String, bool)> {
        self.touches.borrow().clone()
    }

    pub(crate) fn state(&self) -> FormState {
        self.state.borrow().clone()
    }
}

impl FormStateContainer for RecordingForm {
    fn field_snapshot(&self, path: &str) -> FieldSnapshot {
        self.state.borrow().field_snapshot(path)
    }

    fn set_field_value(&self, path: &str, value: Value) {
        self.writes
            .borrow_mut()
            .push((path.to_string(), value.clone()));
        self.state.borrow_mut().set_field_value(path, value);
    }

    fn set_field_touched(&self, path: &str, touched: bool) {
        self.touches.borrow_mut().push((path.to_string(), touched));
        self.state.borrow_mut().set_field_touched(path, touched);
    }
}

/// Render `app` to HTML with `form` available as the form context.
pub(crate) fn render_with(form: Rc<RecordingForm>, app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app).with_root_context(FormContext::new(form));
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
