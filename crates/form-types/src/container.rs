use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{FieldSnapshot, FormState};

/// The capability form controls depend on: read one field, write it back.
///
/// Controls receive an implementation through context rather than reaching
/// for a global, so a signal-backed store, a plain `RefCell<FormState>` or a
/// recording double can all stand behind the same control.
pub trait FormStateContainer {
    fn field_snapshot(&self, path: &str) -> FieldSnapshot;
    fn set_field_value(&self, path: &str, value: Value);
    fn set_field_touched(&self, path: &str, touched: bool);
}

impl FormStateContainer for RefCell<FormState> {
    fn field_snapshot(&self, path: &str) -> FieldSnapshot {
        self.borrow().field_snapshot(path)
    }

    fn set_field_value(&self, path: &str, value: Value) {
        self.borrow_mut().set_field_value(path, value);
    }

    fn set_field_touched(&self, path: &str, touched: bool) {
        self.borrow_mut().set_field_touched(path, touched);
    }
}

impl<T: FormStateContainer + ?Sized> FormStateContainer for Rc<T> {
    fn field_snapshot(&self, path: &str) -> FieldSnapshot {
        (**self).field_snapshot(path)
    }

    fn set_field_value(&self, path: &str, value: Value) {
        (**self).set_field_value(path, value)
    }

    fn set_field_touched(&self, path: &str, touched: bool) {
        (**self).set_field_touched(path, touched)
    }
}
