//! Gallery page - the whole app surface.
//!
//! Owns the page-level keyboard shortcuts:
//! - `Escape` closes the overlay, otherwise an open dropdown
//! - `Tab` cycles the overlay controls while the overlay is open
//! - `/` focuses the search box when no overlay is shown

use dioxus::prelude::*;

use crate::actions;
use crate::components::{CharacterGrid, DetailOverlay, FilterBar, Toasts};
use crate::context::{use_gallery, use_search_focus};

#[component]
pub fn Gallery() -> Element {
    let state = use_gallery();
    let search_focus = use_search_focus();

    let scroll_locked = state.read().is_scroll_locked();

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => {
            if actions::escape(state) {
                evt.prevent_default();
            }
        }
        Key::Tab => {
            if state.read().overlay().traps_tab() {
                evt.prevent_default();
                actions::trap_focus(state, evt.modifiers().shift());
            }
        }
        Key::Character(c) if c == "/" => {
            let focus = search_focus.read().clone();
            if focus.focused || !state.read().search_shortcut_allowed() {
                return;
            }
            if let Some(input) = focus.handle {
                evt.prevent_default();
                spawn(async move {
                    let _ = input.set_focus(true).await;
                });
            }
        }
        _ => {}
    };

    rsx! {
        div {
            class: if scroll_locked { "gallery-app scroll-locked" } else { "gallery-app" },
            tabindex: "-1",
            onmounted: move |e| {
                let handle = e.data();
                spawn(async move {
                    let _ = handle.set_focus(true).await;
                });
            },
            onkeydown: on_keydown,
            onclick: move |_| {
                let mut state = state;
                if state.read().open_dropdown().is_some() {
                    state.write().close_dropdown();
                }
            },

            header { class: "gallery-header",
                h1 { class: "page-title", "Character Gallery" }
                p { class: "tagline", "Browse, filter and download character models" }
            }

            FilterBar {}

            main { class: "gallery-main",
                "aria-hidden": if state.read().overlay().is_active() { "true" } else { "false" },
                CharacterGrid {}
            }

            DetailOverlay {}
            Toasts {}
        }
    }
}
