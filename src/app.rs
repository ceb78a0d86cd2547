use dioxus::prelude::*;

use crate::actions;
use crate::context::{GalleryState, SearchFocus};
use crate::get_launch_settings;
use crate::pages::Gallery;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the gallery state, and kicks off the one-time
/// dataset load.
#[component]
pub fn App() -> Element {
    let state: Signal<GalleryState> = use_signal(|| {
        let launch = get_launch_settings();
        GalleryState::new(launch.config, launch.source)
    });
    let search_focus: Signal<SearchFocus> = use_signal(SearchFocus::default);

    use_context_provider(|| state);
    use_context_provider(|| search_focus);

    // Load once on mount
    use_hook(move || actions::load_dataset(state));

    rsx! {
        style { {GLOBAL_STYLES} }
        Gallery {}
    }
}
