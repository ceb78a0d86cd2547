//! Search Input Component
//!
//! Text search box with a leading icon, a clear affordance and a `/` hint.

use std::rc::Rc;

use dioxus::prelude::*;

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search characters...".to_string())]
    pub placeholder: String,
    /// Accessible label
    #[props(default = "Search characters by name".to_string())]
    pub aria_label: String,
    /// Receives the mounted input so the shell can focus it on `/`
    #[props(default)]
    pub onmounted: Option<EventHandler<Rc<MountedData>>>,
    /// Focus tracking (the `/` shortcut is ignored while focused)
    #[props(default)]
    pub onfocuschange: Option<EventHandler<bool>>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let has_value = !props.value.is_empty();
    let oninput = props.oninput;
    let onfocuschange = props.onfocuschange;

    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "aria-hidden": "true", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                "aria-label": "{props.aria_label}",
                value: "{props.value}",
                onmounted: move |e| {
                    if let Some(handler) = &props.onmounted {
                        handler.call(e.data());
                    }
                },
                onfocus: move |_| {
                    if let Some(handler) = &onfocuschange {
                        handler.call(true);
                    }
                },
                onblur: move |_| {
                    if let Some(handler) = &onfocuschange {
                        handler.call(false);
                    }
                },
                oninput: move |e| oninput.call(e.value()),
            }
            if has_value {
                button {
                    class: "search-clear",
                    r#type: "button",
                    "aria-label": "Clear search",
                    onclick: move |_| oninput.call(String::new()),
                    "\u{00D7}"
                }
            } else {
                kbd { class: "search-hint", "aria-hidden": "true", "/" }
            }
        }
    }
}
