use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Field caption. `html_for` ties it to the control's `id`.
#[component]
pub fn FieldLabel(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "field-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
