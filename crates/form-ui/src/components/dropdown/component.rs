use dioxus::prelude::*;
use serde_json::Value;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownItem {
    pub key: String,
    pub text: String,
    pub value: Value,
}

impl DropdownItem {
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        let text = text.into();
        Self {
            key: text.clone(),
            text,
            value: value.into(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

/// Widget options. Anything not covered here goes through as a plain HTML
/// attribute on the `select`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DropdownSettings {
    pub items: Vec<DropdownItem>,
    pub placeholder: String,
    pub disabled: bool,
    /// Offer an empty choice that resets the value to `null`.
    pub clearable: bool,
    /// Stretch to the width of the container.
    pub fluid: bool,
}

impl DropdownSettings {
    pub fn new(items: Vec<DropdownItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }
}

/// Payload of a selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownChange {
    pub value: Value,
}

/// Map the raw `select` value (an item index, or empty for the placeholder)
/// back to the item's value.
pub fn resolve_selection(items: &[DropdownItem], raw: &str) -> Value {
    raw.parse::<usize>()
        .ok()
        .and_then(|index| items.get(index))
        .map(|item| item.value.clone())
        .unwrap_or(Value::Null)
}

fn dropdown_class(settings: &DropdownSettings, error: bool) -> String {
    let mut classes = vec!["ui", "selection", "dropdown"];
    if settings.fluid {
        classes.push("fluid");
    }
    if settings.disabled {
        classes.push("disabled");
    }
    if error {
        classes.push("error");
    }
    classes.join(" ")
}

/// A themed selection list over a native `select`.
///
/// Items carry arbitrary JSON values; the DOM only ever sees their indices.
/// `attributes` and `extra_attributes` are both forwarded to the `select`,
/// the latter so wrapping controls can pass their own attribute bag along.
#[component]
pub fn Dropdown(
    #[props(default)] settings: DropdownSettings,
    /// Currently selected value; `null` selects the placeholder.
    #[props(default)]
    value: Value,
    #[props(default = false)] error: bool,
    #[props(default)] on_change: EventHandler<DropdownChange>,
    #[props(default)] on_blur: EventHandler<()>,
    #[props(default)] extra_attributes: Vec<Attribute>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let selected = settings.items.iter().position(|item| item.value == value);
    let show_placeholder =
        selected.is_none() || settings.clearable || !settings.placeholder.is_empty();

    let base = vec![
        Attribute::new("class", dropdown_class(&settings, error), None, false),
        Attribute::new(
            "aria-invalid",
            if error { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, extra_attributes, attributes]);
    let items = settings.items.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            disabled: settings.disabled,
            onchange: move |evt: Event<FormData>| {
                on_change.call(DropdownChange {
                    value: resolve_selection(&items, &evt.value()),
                });
            },
            onblur: move |_| on_blur.call(()),
            ..merged,
            if show_placeholder {
                option {
                    class: "dropdown-placeholder",
                    value: "",
                    disabled: !settings.clearable,
                    selected: selected.is_none(),
                    "{settings.placeholder}"
                }
            }
            for (index, item) in settings.items.iter().enumerate() {
                option {
                    key: "{item.key}",
                    value: "{index}",
                    selected: selected == Some(index),
                    "{item.text}"
                }
            }
        }
    }
}
