use dioxus::prelude::*;

/// Colour for inline labels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LabelColor {
    #[default]
    Red,
    Orange,
    Yellow,
    Grey,
}

impl LabelColor {
    fn class(&self) -> &'static str {
        match self {
            LabelColor::Red => "red",
            LabelColor::Orange => "orange",
            LabelColor::Yellow => "yellow",
            LabelColor::Grey => "grey",
        }
    }
}

fn label_class(color: LabelColor, basic: bool, pointing: bool) -> String {
    let mut classes = vec!["ui", color.class()];
    if basic {
        classes.push("basic");
    }
    if pointing {
        classes.push("pointing");
    }
    classes.push("label");
    classes.join(" ")
}

/// Inline badge for a field's validation message. Defaults to a basic red
/// label pointing up at the control above it.
#[component]
pub fn ErrorLabel(
    #[props(default)] color: LabelColor,
    #[props(default = true)] basic: bool,
    #[props(default = true)] pointing: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", label_class(color, basic, pointing), None, false),
        Attribute::new("data-color", color.class(), None, false),
        Attribute::new("role", "alert", None, false),
    ];
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
    fn default_label_is_basic_pointing_red() {
        assert_eq!(
            label_class(LabelColor::default(), true, true),
            "ui red basic pointing label"
        );
    }

    #[test]
    fn flags_can_be_dropped() {
        assert_eq!(label_class(LabelColor::Grey, false, false), "ui grey label");
    }

    fn app() -> Element {
        rsx! {
            ErrorLabel { "Required" }
        }
    }

    #[test]
    fn renders_children_as_text() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("ui red basic pointing label"));
        assert!(html.contains(">Required<"));
    }
}
