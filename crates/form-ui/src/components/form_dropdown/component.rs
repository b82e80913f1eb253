use dioxus::prelude::*;

use crate::binder::{use_field, FieldBinder};
use crate::components::{
    Dropdown, DropdownChange, DropdownSettings, ErrorLabel, FieldLabel, FormField, LabelColor,
};

/// A dropdown bound to the field at `name` in the surrounding form.
///
/// `widget` and any extra attributes go to the [`Dropdown`] untouched. The
/// field shows as invalid once it has been touched and carries an error; the
/// message badge additionally requires non-empty error text.
#[component]
pub fn FormDropdown(
    /// Field path, e.g. `address.country` or `contacts[0].kind`.
    name: String,
    #[props(default)] label: String,
    #[props(default = false)] required: bool,
    #[props(default)] widget: DropdownSettings,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let field = use_field(&name);
    let snapshot = field.snapshot();
    let invalid = snapshot.touched && snapshot.has_error();
    let error = snapshot.error.clone().unwrap_or_default();

    let mut attributes = attributes;
    let id = match control_id(&attributes) {
        Some(id) => id,
        None => {
            attributes.push(Attribute::new("id", name.clone(), None, false));
            name.clone()
        }
    };

    let on_change = change_handler(field.clone());
    let on_blur = move |_: ()| field.handle_blur();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        FormField { error: invalid, required,
            FieldLabel { html_for: id, "{label}" }
            Dropdown {
                settings: widget,
                value: snapshot.value.clone(),
                error: invalid,
                on_change,
                on_blur,
                extra_attributes: attributes,
            }
            if invalid && snapshot.has_error() {
                ErrorLabel { color: LabelColor::Red, basic: true, pointing: true, "{error}" }
            }
        }
    }
}

/// Forward a dropdown selection to the bound field as a single value write.
pub fn change_handler(field: FieldBinder) -> impl FnMut(DropdownChange) {
    move |change: DropdownChange| field.handle_change(change.value)
}

/// The caller's `id` attribute, when it is plain text.
fn control_id(attributes: &[Attribute]) -> Option<String> {
    attributes
        .iter()
        .find(|attr| attr.name == "id")
        .and_then(|attr| match &attr.value {
            AttributeValue::Text(id) => Some(id.clone()),
            _ => None,
        })
}
