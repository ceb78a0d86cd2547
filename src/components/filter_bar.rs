//! Filter Bar Component
//!
//! Search box, one dropdown per facet, a clear button and the result count.

use dioxus::prelude::*;
use gallery_core::Facet;
use gallery_ui::{Button, ButtonVariant, FacetDropdown, IndicatorSize, LoadingIndicator, SearchInput};

use crate::actions;
use crate::context::{use_gallery, use_search_focus};

#[component]
pub fn FilterBar() -> Element {
    let mut state = use_gallery();
    let mut search_focus = use_search_focus();

    let s = state.read();
    let pending = s.pending_filter().clone();
    let options = s.options().clone();
    let open = s.open_dropdown();
    let filtering = s.is_filtering();
    let has_filters = s.has_active_filters();
    let summary = s.summary();
    drop(s);

    rsx! {
        section { class: "filter-bar", "aria-label": "Filters",
            SearchInput {
                value: pending.search.clone(),
                oninput: move |text: String| actions::search(state, text),
                onmounted: move |handle| search_focus.write().handle = Some(handle),
                onfocuschange: move |focused| search_focus.write().focused = focused,
            }

            for facet in Facet::ALL {
                FacetDropdown {
                    key: "{facet.key()}",
                    facet_key: facet.key().to_string(),
                    label: options.label_for(facet, pending.facet(facet)),
                    options: options.for_facet(facet).to_vec(),
                    selected: pending.facet(facet).to_string(),
                    open: open == Some(facet),
                    on_toggle: move |_| state.write().toggle_dropdown(facet),
                    on_select: move |value: String| actions::select(state, facet, value),
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                class: "clear-filters".to_string(),
                disabled: !has_filters,
                onclick: move |_| actions::clear_filters(state),
                "Clear filters"
            }

            div { class: "filter-bar__status",
                if filtering {
                    LoadingIndicator { label: "Filtering...".to_string(), size: IndicatorSize::Small }
                } else if let Some(text) = summary {
                    span { class: "result-count", "{text}" }
                }
            }
        }
    }
}
