//! Character Grid Component
//!
//! Maps the grid view model to the loading, error, empty or card states.

use dioxus::prelude::*;
use gallery_core::GridView;
use gallery_ui::{Button, ButtonVariant, LoadingIndicator};

use super::CharacterCard;
use crate::actions;
use crate::context::use_gallery;

#[component]
pub fn CharacterGrid() -> Element {
    let state = use_gallery();
    let view = state.read().grid_view();

    match view {
        GridView::Loading => rsx! {
            div { class: "grid-state",
                LoadingIndicator { label: "Loading characters...".to_string() }
            }
        },
        GridView::LoadFailed(message) => rsx! {
            div { class: "grid-state grid-state--error", role: "alert",
                div { class: "empty-icon", "⚠" }
                p { "Could not load the character collection." }
                p { class: "empty-hint", "{message}" }
            }
        },
        GridView::DatasetEmpty => rsx! {
            div { class: "grid-state grid-state--error", role: "alert",
                div { class: "empty-icon", "⚠" }
                p { "The character collection is empty." }
                p { class: "empty-hint", "Check the dataset and restart the gallery." }
            }
        },
        GridView::NoResults => rsx! {
            div { class: "grid-state grid-state--empty",
                div { class: "empty-icon", "∅" }
                p { "No characters match your filters." }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| actions::clear_filters(state),
                    "Clear filters"
                }
            }
        },
        GridView::Cards(cards) => rsx! {
            div { class: "character-grid",
                for card in cards {
                    CharacterCard { key: "{card.id}", card: card.clone() }
                }
            }
        },
    }
}
