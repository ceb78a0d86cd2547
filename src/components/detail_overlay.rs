//! Detail Overlay Component
//!
//! Modal view of one character. Mounted while the overlay is Opening, Open
//! or Closing; the `active` class (and with it the CSS transition) is only
//! applied once Open. The controls register with the overlay session so the
//! page can cycle Tab and Shift+Tab between them.

use dioxus::prelude::*;
use gallery_core::OverlayPhase;
use gallery_ui::{Badges, Button, ButtonVariant, CloseButton, FallbackImage};

use super::ArchivePanel;
use crate::actions;
use crate::context::{use_gallery, CardHandle};

/// Focus slot of the close button
const CLOSE_SLOT: usize = 0;
/// Focus slot of the download button
const DOWNLOAD_SLOT: usize = 1;

#[component]
pub fn DetailOverlay() -> Element {
    let mut state = use_gallery();

    use_effect(move || {
        let (phase, generation) = {
            let s = state.read();
            (s.overlay().phase(), s.overlay().generation())
        };
        if phase == OverlayPhase::Opening {
            actions::activate_overlay(state, generation);
        }
    });

    let s = state.read();
    let phase = s.overlay().phase();
    let generation = s.overlay().generation();
    let archive = s.archive().clone();
    let detail = s.detail_view();
    drop(s);

    let Some(detail) = detail.filter(|_| phase != OverlayPhase::Closed) else {
        return rsx! {};
    };

    let is_active = phase == OverlayPhase::Open;
    let download_locator = detail.archive_locator.clone();
    let download_id = detail.id.clone();
    let download_name = detail.heading.clone();

    let mut register = move |slot: usize, handle: CardHandle| {
        state.write().overlay_mut().register_control(slot, handle);
    };

    let mut track_focus = move |slot: usize| {
        if let Some(trap) = state.write().overlay_mut().trap_mut() {
            trap.focused(slot);
        }
    };

    rsx! {
        div {
            class: if is_active { "overlay active" } else { "overlay" },
            onclick: move |_| actions::close_overlay(state),
            ontransitionend: move |evt: TransitionEvent| {
                actions::overlay_transition_end(state, generation, evt.property_name())
            },

            div {
                class: "detail-dialog",
                role: "dialog",
                tabindex: "-1",
                "aria-modal": "true",
                "aria-labelledby": "detail-title",
                "aria-hidden": if is_active { "false" } else { "true" },
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    onclick: move |_| actions::close_overlay(state),
                    onmounted: move |handle| register(CLOSE_SLOT, handle),
                    onfocus: move |_| track_focus(CLOSE_SLOT),
                }

                div { class: "detail-media",
                    FallbackImage {
                        key: "{detail.id}",
                        src: detail.image.clone(),
                        fallback: detail.fallback_image.clone(),
                        alt: detail.heading.clone(),
                        class: "detail-splash".to_string(),
                    }
                }

                div { class: "detail-body",
                    h2 { id: "detail-title", class: "detail-title", "{detail.heading}" }
                    Badges {
                        rarity: detail.rarity.clone(),
                        element: detail.element.clone(),
                        path: detail.path.clone(),
                    }

                    if let Some(description) = &detail.description {
                        p { class: "detail-description", "{description}" }
                    }

                    if let Some(info) = &detail.model_info {
                        section { class: "detail-section",
                            h3 { "Model Info" }
                            p { "{info}" }
                        }
                    }

                    if !detail.meta.is_empty() {
                        dl { class: "detail-meta",
                            for row in detail.meta.iter() {
                                div { key: "{row.label}", class: "detail-meta__row",
                                    dt { "{row.label}" }
                                    dd {
                                        "{row.value}"
                                        if row.verified {
                                            span { class: "verified", title: "Verified", " ✓" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if !detail.inclusions.is_empty() {
                        section { class: "detail-section",
                            h3 { "Included" }
                            ul { class: "inclusion-list",
                                for item in detail.inclusions.iter() {
                                    li { key: "{item.key}",
                                        strong { "{item.name}" }
                                        if !item.description.is_empty() {
                                            span { class: "inclusion-description", " {item.description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    ArchivePanel { listing: archive }

                    div { class: "detail-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                actions::start_download(
                                    state,
                                    Some(download_locator.clone()),
                                    Some(download_id.clone()),
                                    download_name.clone(),
                                )
                            },
                            onmounted: move |handle| register(DOWNLOAD_SLOT, handle),
                            onfocus: move |_| track_focus(DOWNLOAD_SLOT),
                            "Download model"
                        }
                    }
                }
            }
        }
    }
}
