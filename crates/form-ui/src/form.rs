use dioxus::prelude::*;
use form_types::{FieldSnapshot, FormConfig, FormState, FormStateContainer};
use serde_json::Value;
use std::rc::Rc;

/// Caller-supplied validation: takes the values tree, returns an errors tree.
pub type Validator = Rc<dyn Fn(&Value) -> Value>;

/// Handle to whichever form-state container is in scope.
///
/// Provided through Dioxus context by [`use_form`] (or by a test harness) and
/// consumed by form-bound controls via [`crate::use_field`].
#[derive(Clone)]
pub struct FormContext(Rc<dyn FormStateContainer>);

impl FormContext {
    pub fn new(container: impl FormStateContainer + 'static) -> Self {
        Self(Rc::new(container))
    }
}

impl FormStateContainer for FormContext {
    fn field_snapshot(&self, path: &str) -> FieldSnapshot {
        self.0.field_snapshot(path)
    }

    fn set_field_value(&self, path: &str, value: Value) {
        self.0.set_field_value(path, value)
    }

    fn set_field_touched(&self, path: &str, touched: bool) {
        self.0.set_field_touched(path, touched)
    }
}

/// How a store reacts to writes: when to touch, when to validate.
#[derive(Clone, Default)]
pub struct FormRules {
    pub config: FormConfig,
    pub validator: Option<Validator>,
}

impl FormRules {
    pub fn set_value(&self, state: &mut FormState, path: &str, value: Value) {
        tracing::debug!(path, %value, "form field value set");
        if !state.set_field_value(path, value) {
            return;
        }
        if self.config.touch_on_change {
            state.set_field_touched(path, true);
        }
        if self.config.validate_on_change {
            self.validate(state);
        }
    }

    pub fn set_touched(&self, state: &mut FormState, path: &str, touched: bool) {
        if !state.set_field_touched(path, touched) {
            return;
        }
        if self.config.validate_on_blur {
            self.validate(state);
        }
    }

    /// Replace the errors tree with the validator's output. Without a
    /// validator the existing errors are kept. Returns whether the form is
    /// valid afterwards.
    pub fn validate(&self, state: &mut FormState) -> bool {
        if let Some(validator) = &self.validator {
            state.errors = validator(&state.values);
            tracing::debug!(errors = %state.errors, "form validated");
        }
        state.is_valid()
    }

    /// Touch every field, count the attempt and validate.
    pub fn submit(&self, state: &mut FormState) -> bool {
        state.touch_all();
        state.submit_count += 1;
        state.is_submitting = true;
        let valid = self.validate(state);
        state.is_submitting = false;
        valid
    }
}

/// Everything [`use_form`] needs to create a store.
#[derive(Clone, Default)]
pub struct FormSetup {
    pub initial_values: Value,
    pub config: FormConfig,
    pub validator: Option<Validator>,
}

impl FormSetup {
    pub fn new(initial_values: Value) -> Self {
        Self {
            initial_values,
            ..Self::default()
        }
    }

    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn validator(mut self, validator: impl Fn(&Value) -> Value + 'static) -> Self {
        self.validator = Some(Rc::new(validator));
        self
    }
}

/// Signal-backed form-state container. Reading a field inside a render
/// subscribes that component to the store.
#[derive(Clone)]
pub struct FormStore {
    state: Signal<FormState>,
    initial_values: Rc<Value>,
    rules: FormRules,
}

impl FormStore {
    pub fn new(setup: FormSetup) -> Self {
        Self {
            state: Signal::new(FormState::new(setup.initial_values.clone())),
            initial_values: Rc::new(setup.initial_values),
            rules: FormRules {
                config: setup.config,
                validator: setup.validator,
            },
        }
    }

    pub fn state(&self) -> Signal<FormState> {
        self.state
    }

    pub fn set_errors(&self, errors: Value) {
        let mut state = self.state;
        state.write().errors = errors;
    }

    pub fn set_touched(&self, touched: Value) {
        let mut state = self.state;
        state.write().touched = touched;
    }

    pub fn validate(&self) -> bool {
        let mut state = self.state;
        let mut state = state.write();
        self.rules.validate(&mut state)
    }

    pub fn submit(&self) -> bool {
        let mut state = self.state;
        let mut state = state.write();
        self.rules.submit(&mut state)
    }

    /// Back to the initial values with nothing touched and no errors.
    pub fn reset(&self) {
        let mut state = self.state;
        state.set(FormState::new((*self.initial_values).clone()));
    }
}

impl FormStateContainer for FormStore {
    fn field_snapshot(&self, path: &str) -> FieldSnapshot {
        self.state.read().field_snapshot(path)
    }

    fn set_field_value(&self, path: &str, value: Value) {
        let mut state = self.state;
        let mut state = state.write();
        self.rules.set_value(&mut state, path, value);
    }

    fn set_field_touched(&self, path: &str, touched: bool) {
        let mut state = self.state;
        let mut state = state.write();
        self.rules.set_touched(&mut state, path, touched);
    }
}

/// Create a form store for this component and provide it to descendants.
pub fn use_form(setup: impl FnOnce() -> FormSetup) -> FormStore {
    let store = use_hook(move || FormStore::new(setup()));
    let provided = store.clone();
    use_context_provider(move || FormContext::new(provided));
    store
}
