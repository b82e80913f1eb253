use dioxus::prelude::*;

/// Class list for a form field wrapper.
pub fn field_class(error: bool, required: bool) -> String {
    let mut classes = vec!["field"];
    if error {
        classes.push("error");
    }
    if required {
        classes.push("required");
    }
    classes.join(" ")
}

/// Wrapper grouping a label, a control and its validation message.
///
/// `error` tints the whole group; `required` adds the required marker to the
/// label via CSS.
#[component]
pub fn FormField(
    #[props(default = false)] error: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", field_class(error, required), None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_reflects_flags() {
        assert_eq!(field_class(false, false), "field");
        assert_eq!(field_class(true, false), "field error");
        assert_eq!(field_class(false, true), "field required");
        assert_eq!(field_class(true, true), "field error required");
    }
}
