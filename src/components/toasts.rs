//! Toast notifications
//!
//! Each toast runs its own lifecycle: visible for `toast_visible_ms`, then
//! marked leaving for `toast_exit_ms` while the exit animation plays, then
//! removed.

use dioxus::prelude::*;
use gallery_core::Notification;

use crate::context::use_gallery;

#[component]
pub fn Toasts() -> Element {
    let state = use_gallery();
    let items = state.read().notifications().items().to_vec();

    rsx! {
        div { class: "toast-container", role: "status", "aria-live": "polite",
            for item in items {
                Toast { key: "{item.id}", notification: item.clone() }
            }
        }
    }
}

#[component]
fn Toast(notification: Notification) -> Element {
    let mut state = use_gallery();
    let id = notification.id;

    use_hook(move || {
        let (visible, exit) = {
            let s = state.peek();
            (s.config.toast_visible(), s.config.toast_exit())
        };
        spawn_forever(async move {
            tokio::time::sleep(visible).await;
            state.write().begin_dismiss(id);
            tokio::time::sleep(exit).await;
            state.write().remove_notification(id);
        });
    });

    let class = if notification.leaving {
        format!("toast {} leaving", notification.severity.class())
    } else {
        format!("toast {}", notification.severity.class())
    };

    rsx! {
        div { class: "{class}",
            span { class: "toast-icon", "{notification.severity.icon()}" }
            span { class: "toast-message", "{notification.message}" }
        }
    }
}
