//! Side-effecting gallery actions.
//!
//! Components call these instead of mutating the state directly whenever an
//! action involves a timer or I/O. Tasks are spawned with `spawn_forever` so
//! they outlive the component that started them (a card may unmount while
//! its archive listing is still in flight).

use dioxus::prelude::*;
use gallery_core::{archive, download, loader, EscapeOutcome, Facet, OverlayPhase, Severity};

use crate::context::{CardHandle, GalleryState};

/// Load the dataset once at startup.
pub fn load_dataset(mut state: Signal<GalleryState>) {
    let (source, dataset_path) = {
        let s = state.read();
        (s.source.clone(), s.config.dataset_path.clone())
    };
    spawn_forever(async move {
        let result = loader::load(&source, &dataset_path).await;
        state.write().loaded(result);
    });
}

/// New search text: debounce, show the indicator, then apply.
pub fn search(mut state: Signal<GalleryState>, text: String) {
    let ticket = state.write().input_search(text);
    let (debounce, delay) = {
        let s = state.read();
        (s.config.search_debounce(), s.config.filter_delay())
    };
    spawn_forever(async move {
        tokio::time::sleep(debounce).await;
        if !state.write().begin_filtering(ticket) {
            return;
        }
        tokio::time::sleep(delay).await;
        state.write().commit(ticket);
    });
}

/// Pick a facet value.
pub fn select(mut state: Signal<GalleryState>, facet: Facet, value: String) {
    let ticket = state.write().select(facet, value);
    commit_after_delay(state, ticket);
}

/// Reset every filter.
pub fn clear_filters(mut state: Signal<GalleryState>) {
    let ticket = state.write().clear_filters();
    commit_after_delay(state, ticket);
}

fn commit_after_delay(mut state: Signal<GalleryState>, ticket: gallery_core::Ticket) {
    let delay = state.read().config.filter_delay();
    spawn_forever(async move {
        tokio::time::sleep(delay).await;
        state.write().commit(ticket);
    });
}

/// Open the overlay for a card and start listing its archive.
pub fn open_character(mut state: Signal<GalleryState>, id: String, trigger: Option<CardHandle>) {
    let Some(generation) = state.write().open_character(&id, trigger) else {
        return;
    };

    let (source, locator) = {
        let s = state.read();
        (s.source.clone(), s.detail_view().map(|d| d.archive_locator))
    };
    let Some(locator) = locator else {
        return;
    };

    spawn_forever(async move {
        let result = archive::list_entries(&source, &locator).await;
        state.write().archive_loaded(generation, result);
    });
}

/// `Opening → Open` one frame after the overlay is laid out; focuses the
/// first trapped element.
pub fn activate_overlay(mut state: Signal<GalleryState>, generation: u64) {
    spawn_forever(async move {
        // let the un-activated overlay paint first
        tokio::time::sleep(std::time::Duration::from_millis(16)).await;

        let handle = {
            let mut s = state.write();
            let descriptors = s.overlay().control_focusables();
            if s.overlay().generation() != generation || !s.activate_overlay(&descriptors) {
                return;
            }
            let overlay = s.overlay_mut();
            let first = overlay.trap_mut().and_then(|t| t.first());
            first.and_then(|i| overlay.control(i).cloned())
        };

        if let Some(handle) = handle {
            let _ = handle.set_focus(true).await;
        }
    });
}

/// Move focus within the overlay for Tab / Shift+Tab.
pub fn trap_focus(mut state: Signal<GalleryState>, shift: bool) {
    let handle = {
        let mut s = state.write();
        let overlay = s.overlay_mut();
        let next = overlay.trap_mut().and_then(|t| t.next(shift));
        next.and_then(|i| overlay.control(i).cloned())
    };
    if let Some(handle) = handle {
        spawn_forever(async move {
            let _ = handle.set_focus(true).await;
        });
    }
}

/// Start closing the overlay and arm the fallback finalizer.
pub fn close_overlay(mut state: Signal<GalleryState>) {
    let Some(generation) = state.write().close_overlay() else {
        return;
    };
    arm_close_fallback(state, generation);
}

fn arm_close_fallback(state: Signal<GalleryState>, generation: u64) {
    let fallback = state.read().config.close_fallback();
    spawn_forever(async move {
        tokio::time::sleep(fallback).await;
        finalize_overlay(state, generation);
    });
}

/// Finish closing (fallback timer) and refocus the card.
pub fn finalize_overlay(mut state: Signal<GalleryState>, generation: u64) {
    let trigger = state.write().finalize_overlay(generation);
    refocus_trigger(trigger);
}

/// Transition end bubbled to the overlay; the fade finishes a close.
pub fn overlay_transition_end(mut state: Signal<GalleryState>, generation: u64, property: String) {
    if state.peek().overlay().phase() != OverlayPhase::Closing {
        return;
    }
    let trigger = state.write().overlay_transition_ended(generation, &property);
    refocus_trigger(trigger);
}

fn refocus_trigger(trigger: Option<CardHandle>) {
    if let Some(card) = trigger {
        spawn_forever(async move {
            if let Err(e) = card.set_focus(true).await {
                tracing::debug!("Could not return focus to card: {:?}", e);
            }
        });
    }
}

/// Escape: overlay first, then an open dropdown.
pub fn escape(mut state: Signal<GalleryState>) -> bool {
    let outcome = state.write().escape();
    match outcome {
        EscapeOutcome::ClosedOverlay(generation) => {
            arm_close_fallback(state, generation);
            true
        }
        EscapeOutcome::ClosedDropdown => true,
        EscapeOutcome::Ignored => false,
    }
}

/// Save a character archive via the native save dialog.
pub fn start_download(
    mut state: Signal<GalleryState>,
    locator: Option<String>,
    id: Option<String>,
    display_name: String,
) {
    let Some(plan) = state
        .write()
        .plan_download(locator.as_deref(), id.as_deref(), &display_name)
    else {
        return;
    };
    let source = state.read().source.clone();

    spawn_forever(async move {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Save model archive")
            .set_file_name(plan.file_name.as_str())
            .add_filter("Zip archive", &["zip"]);
        if let Some(dir) = dirs::download_dir() {
            dialog = dialog.set_directory(dir);
        }

        let Some(target) = dialog.save_file().await else {
            state.write().notify("Download cancelled", Severity::Info);
            return;
        };

        state
            .write()
            .notify(format!("Download started: {}", plan.file_name), Severity::Info);

        match download::save_download(&source, &plan, target.path()).await {
            Ok(path) => {
                state
                    .write()
                    .notify(format!("Saved {}", path.display()), Severity::Success);
            }
            Err(e) => {
                state.write().notify(e.to_string(), Severity::Error);
            }
        }
    });
}
