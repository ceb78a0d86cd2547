//! Shared gallery state for all components.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(GalleryState::new(config, source)));
//!
//! // In child components
//! let state = use_gallery();
//! let view = state.read().grid_view();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use gallery_core::AppState;

/// Handle to a mounted card; focus returns here when the overlay closes.
pub type CardHandle = Rc<MountedData>;

/// The app state with cards as focus-return targets.
pub type GalleryState = AppState<CardHandle>;

/// Hook to access the gallery state from context.
pub fn use_gallery() -> Signal<GalleryState> {
    use_context::<Signal<GalleryState>>()
}

/// The search box, shared so the `/` shortcut can focus it.
#[derive(Clone, Default)]
pub struct SearchFocus {
    /// Mounted search input
    pub handle: Option<Rc<MountedData>>,
    /// Whether the search input currently has focus
    pub focused: bool,
}

/// Hook to access the search box focus state.
pub fn use_search_focus() -> Signal<SearchFocus> {
    use_context::<Signal<SearchFocus>>()
}
