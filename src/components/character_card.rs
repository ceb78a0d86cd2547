//! Character Card Component
//!
//! Compact grid representation of one record. The whole card is activatable
//! (click, Enter, Space) except its nested download button.

use std::rc::Rc;

use dioxus::prelude::*;
use gallery_core::CardView;
use gallery_ui::{is_activation_key, Badges, Button, ButtonVariant, FallbackImage};

use crate::actions;
use crate::context::use_gallery;

#[component]
pub fn CharacterCard(card: CardView) -> Element {
    let state = use_gallery();
    let mut handle: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let id = card.id.clone();
    let open = move || actions::open_character(state, id.clone(), handle());

    let open_on_click = open.clone();
    let open_on_key = open;
    let download_id = card.id.clone();
    let download_name = card.name.clone();

    rsx! {
        article {
            class: "character-card",
            role: "button",
            tabindex: "0",
            "aria-label": "Open details for {card.name}",
            onmounted: move |e| handle.set(Some(e.data())),
            onclick: move |_| open_on_click(),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt.key()) {
                    evt.prevent_default();
                    open_on_key();
                }
            },

            div { class: "character-card__image",
                FallbackImage {
                    src: card.image.clone(),
                    fallback: card.fallback_image.clone(),
                    alt: card.name.clone(),
                }
            }

            div { class: "character-card__body",
                h3 { class: "character-card__name", "{card.name}" }
                Badges {
                    rarity: card.rarity.clone(),
                    element: card.element.clone(),
                    path: card.path.clone(),
                }
                if let Some(description) = &card.description {
                    p { class: "character-card__description", "{description}" }
                }
            }

            div { class: "character-card__actions",
                Button {
                    variant: ButtonVariant::Primary,
                    class: "btn-small".to_string(),
                    onclick: move |_| {
                        actions::start_download(
                            state,
                            None,
                            Some(download_id.clone()),
                            download_name.clone(),
                        )
                    },
                    "Download"
                }
            }
        }
    }
}
