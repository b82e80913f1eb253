use dioxus::prelude::*;
use form_types::{FieldSnapshot, FormStateContainer};
use serde_json::Value;

use crate::form::FormContext;

/// Connects one named field to a control: reads its snapshot and writes
/// changes back to the form in scope.
#[derive(Clone)]
pub struct FieldBinder {
    name: String,
    form: FormContext,
}

impl FieldBinder {
    pub fn new(name: impl Into<String>, form: FormContext) -> Self {
        Self {
            name: name.into(),
            form,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value and validation status. Absent paths read as `null`,
    /// untouched and error-free.
    pub fn snapshot(&self) -> FieldSnapshot {
        self.form.field_snapshot(&self.name)
    }

    /// Write a newly selected value at this field's path and nowhere else.
    pub fn handle_change(&self, value: Value) {
        tracing::debug!(field = %self.name, %value, "field changed");
        self.form.set_field_value(&self.name, value);
    }

    pub fn handle_blur(&self) {
        self.form.set_field_touched(&self.name, true);
    }
}

/// Bind the field at `name` to the form provided by an ancestor.
pub fn use_field(name: &str) -> FieldBinder {
    let form = use_context::<FormContext>();
    FieldBinder::new(name, form)
}
