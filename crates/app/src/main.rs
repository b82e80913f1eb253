use dioxus::prelude::*;
use form_types::{errors_from_validation, FormStateContainer, FormsConfig};
use form_ui::components::{DropdownItem, DropdownSettings, FormDropdown};
use form_ui::{use_form, FormSetup};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

const FORM_CONFIG: &str = include_str!("../config.toml");

pub const COUNTRY_OPTIONS: &[(&str, &str)] = &[
    ("NZ", "New Zealand"),
    ("AU", "Australia"),
    ("US", "United States"),
    ("GB", "United Kingdom"),
];

pub const SHIPPING_SPEEDS: &[(&str, &str)] = &[
    ("standard", "Standard (5-7 days)"),
    ("express", "Express (1-2 days)"),
];

#[derive(Debug, Deserialize, Validate)]
struct Checkout {
    #[validate(nested)]
    address: Address,
    #[serde(default)]
    shipping: Shipping,
}

#[derive(Debug, Deserialize, Validate)]
struct Address {
    #[validate(required(message = "Pick a country"))]
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Shipping {
    speed: Option<String>,
}

fn validate_checkout(values: &Value) -> Value {
    match serde_json::from_value::<Checkout>(values.clone()) {
        Ok(checkout) => match checkout.validate() {
            Ok(()) => json!({}),
            Err(errors) => errors_from_validation(&errors),
        },
        Err(err) => {
            tracing::warn!(%err, "checkout values did not decode");
            json!({})
        }
    }
}

fn items(pairs: &[(&str, &str)]) -> Vec<DropdownItem> {
    pairs
        .iter()
        .map(|(value, text)| DropdownItem::new(*text, *value))
        .collect()
}

fn load_config() -> FormsConfig {
    FormsConfig::from_toml_str(FORM_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid form config, using defaults");
        FormsConfig::default()
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let store = use_form(|| {
        FormSetup::new(json!({
            "address": { "country": null },
            "shipping": { "speed": "standard" },
        }))
        .config(load_config().form)
        .validator(validate_checkout)
    });
    let mut summary = use_signal(String::new);

    let submit_store = store.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !submit_store.submit() {
            summary.set(String::new());
            return;
        }
        let checkout: Result<Checkout, _> = submit_store.state().read().values_as();
        match checkout {
            Ok(checkout) => {
                tracing::info!(?checkout, "checkout submitted");
                summary.set(format!(
                    "Shipping to {} ({})",
                    checkout.address.country.unwrap_or_default(),
                    checkout.shipping.speed.unwrap_or_else(|| "standard".to_string()),
                ));
            }
            Err(err) => summary.set(format!("{err}")),
        }
    };

    let reset_store = store.clone();
    let country = store.field_snapshot("address.country").value;

    rsx! {
        form { class: "ui form", onsubmit: handle_submit,
            FormDropdown {
                name: "address.country",
                label: "Country",
                required: true,
                widget: DropdownSettings::new(items(COUNTRY_OPTIONS))
                    .placeholder("Pick one")
                    .fluid(true),
                id: "country",
            }
            FormDropdown {
                name: "shipping.speed",
                label: "Shipping speed",
                widget: DropdownSettings::new(items(SHIPPING_SPEEDS))
                    .clearable(true)
                    .fluid(true),
            }
            div { class: "form-actions",
                button { r#type: "submit", "Continue" }
                button {
                    r#type: "button",
                    onclick: move |_| {
                        reset_store.reset();
                        summary.set(String::new());
                    },
                    "Reset"
                }
            }
        }
        if !country.is_null() {
            p { class: "form-hint", "Selected country code: {country}" }
        }
        if !summary.read().is_empty() {
            p { class: "form-summary", "{summary}" }
        }
    }
}
