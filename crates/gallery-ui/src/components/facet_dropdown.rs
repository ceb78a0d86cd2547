//! Facet Dropdown Component
//!
//! Single-select dropdown for one filter facet (path or element). The first
//! option is the "all" sentinel. Selecting an option replaces the facet's
//! value wholesale.

use dioxus::prelude::*;
use gallery_core::FilterOption;

/// Properties for the FacetDropdown component
#[derive(Clone, PartialEq, Props)]
pub struct FacetDropdownProps {
    /// Stable key used for element ids (`path`, `element`)
    pub facet_key: String,
    /// Label of the current selection
    pub label: String,
    /// Available options, sentinel first
    pub options: Vec<FilterOption>,
    /// Currently selected value (empty for "all")
    pub selected: String,
    /// Whether the option list is shown
    pub open: bool,
    /// Toggle the option list
    pub on_toggle: EventHandler<()>,
    /// Handler called with the chosen value
    pub on_select: EventHandler<String>,
}

/// Dropdown trigger plus option list
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FacetDropdown {
///         facet_key: "path".to_string(),
///         label: options.label_for(Facet::Path, &filter.path),
///         options: options.paths.clone(),
///         selected: filter.path.clone(),
///         open: open_dropdown == Some(Facet::Path),
///         on_toggle: move |_| state.write().toggle_dropdown(Facet::Path),
///         on_select: move |value| select(Facet::Path, value),
///     }
/// }
/// ```
#[component]
pub fn FacetDropdown(props: FacetDropdownProps) -> Element {
    let list_id = format!("{}-options", props.facet_key);
    let on_toggle = props.on_toggle;
    let is_filtered = !props.selected.is_empty();

    rsx! {
        div {
            class: if props.open { "facet-dropdown open" } else { "facet-dropdown" },
            button {
                class: if is_filtered { "facet-dropdown__trigger active" } else { "facet-dropdown__trigger" },
                r#type: "button",
                "aria-haspopup": "listbox",
                "aria-expanded": if props.open { "true" } else { "false" },
                "aria-controls": "{list_id}",
                onclick: move |e| {
                    e.stop_propagation();
                    on_toggle.call(());
                },
                span { class: "facet-dropdown__label", "{props.label}" }
                span { class: "facet-dropdown__chevron", "aria-hidden": "true", "\u{25BE}" }
            }
            if props.open {
                div {
                    id: "{list_id}",
                    class: "facet-dropdown__list",
                    role: "listbox",
                    for option in props.options.iter() {
                        {
                            let value = option.value.clone();
                            let is_selected = props.selected == option.value;
                            let on_select = props.on_select;
                            rsx! {
                                button {
                                    key: "{option.value}",
                                    class: if is_selected { "facet-option selected" } else { "facet-option" },
                                    r#type: "button",
                                    role: "option",
                                    "aria-selected": if is_selected { "true" } else { "false" },
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        on_select.call(value.clone());
                                    },
                                    "{option.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
