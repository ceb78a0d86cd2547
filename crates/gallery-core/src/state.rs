//! Application state controller.
//!
//! Owns everything that changes during a session: the load outcome, the
//! pending and applied filters, the open dropdown, the overlay session, the
//! archive panel and live notifications. The collection itself is immutable
//! once loaded.
//!
//! Filter changes go through a [`Debouncer`]: each change returns a
//! [`Ticket`] and only the newest ticket's `commit` is applied.

use crate::archive::ArchiveListing;
use crate::config::GalleryConfig;
use crate::debounce::{Debouncer, Ticket};
use crate::download::{self, DownloadPlan};
use crate::error::GalleryResult;
use crate::filter::{self, Facet, FilterState};
use crate::notify::{Notifications, Severity};
use crate::options::FacetOptions;
use crate::overlay::{Finalized, Focusable, Overlay, OverlayPhase};
use crate::source::AssetSource;
use crate::types::{Character, Collection};
use crate::view::{self, DetailView, GridView};

/// Outcome of the startup load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// What an Escape key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    /// Overlay moved to `Closing`; finalize with this generation
    ClosedOverlay(u64),
    ClosedDropdown,
    Ignored,
}

/// Whole-app state. `H` is the host UI's handle to a card element.
#[derive(Debug)]
pub struct AppState<H> {
    pub config: GalleryConfig,
    pub source: AssetSource,
    load: LoadState,
    collection: Collection,
    options: FacetOptions,
    applied: FilterState,
    pending: FilterState,
    filtering: bool,
    filter_debouncer: Debouncer,
    open_dropdown: Option<Facet>,
    overlay: Overlay<H>,
    archive: ArchiveListing,
    notifications: Notifications,
}

impl<H> AppState<H> {
    pub fn new(config: GalleryConfig, source: AssetSource) -> Self {
        Self {
            config,
            source,
            load: LoadState::Loading,
            collection: Collection::default(),
            options: FacetOptions::default(),
            applied: FilterState::default(),
            pending: FilterState::default(),
            filtering: false,
            filter_debouncer: Debouncer::new(),
            open_dropdown: None,
            overlay: Overlay::new(),
            archive: ArchiveListing::Loading,
            notifications: Notifications::new(),
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Record the startup load result. Only the first call has any effect.
    pub fn loaded(&mut self, result: GalleryResult<Collection>) {
        if self.load != LoadState::Loading {
            tracing::warn!("Dataset already loaded; ignoring second load result");
            return;
        }
        match result {
            Ok(collection) => {
                self.options = FacetOptions::derive(&collection);
                self.collection = collection;
                self.load = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!("Startup load failed: {}", e);
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn options(&self) -> &FacetOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    /// Filter currently reflected by the grid
    pub fn filter(&self) -> &FilterState {
        &self.applied
    }

    /// Filter the user has asked for (ahead of `filter()` while debouncing)
    pub fn pending_filter(&self) -> &FilterState {
        &self.pending
    }

    pub fn search_input(&self) -> &str {
        &self.pending.search
    }

    /// Loading indicator for the artificial filter delay
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn filtered(&self) -> Vec<&Character> {
        filter::apply(&self.collection, &self.applied)
    }

    /// New search text; apply with [`commit`](Self::commit) after the debounce.
    pub fn input_search(&mut self, text: impl Into<String>) -> Ticket {
        self.pending.search = text.into();
        self.filter_debouncer.schedule()
    }

    /// Whether `ticket` is still the newest scheduled filter change
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.filter_debouncer.is_current(ticket)
    }

    /// Show the loading indicator if `ticket` is still current
    pub fn begin_filtering(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.filtering = true;
        true
    }

    /// Replace one facet's selection and close its dropdown
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) -> Ticket {
        self.pending.select(facet, value);
        self.open_dropdown = None;
        self.filtering = true;
        self.filter_debouncer.schedule()
    }

    /// Reset search and both facets to their "all" sentinel
    pub fn clear_filters(&mut self) -> Ticket {
        self.pending.clear();
        self.open_dropdown = None;
        self.filtering = true;
        self.filter_debouncer.schedule()
    }

    /// Apply the pending filter if `ticket` was not superseded.
    pub fn commit(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.applied = self.pending.clone();
        self.filtering = false;
        true
    }

    pub fn has_active_filters(&self) -> bool {
        !self.pending.is_empty()
    }

    // ------------------------------------------------------------------
    // Dropdowns
    // ------------------------------------------------------------------

    pub fn open_dropdown(&self) -> Option<Facet> {
        self.open_dropdown
    }

    pub fn toggle_dropdown(&mut self, facet: Facet) {
        self.open_dropdown = if self.open_dropdown == Some(facet) {
            None
        } else {
            Some(facet)
        };
    }

    pub fn close_dropdown(&mut self) -> bool {
        self.open_dropdown.take().is_some()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn grid_view(&self) -> GridView {
        match &self.load {
            LoadState::Loading => GridView::Loading,
            LoadState::Failed(msg) => GridView::LoadFailed(msg.clone()),
            LoadState::Ready => {
                let filtered = self.filtered();
                view::grid_view(&self.collection, &filtered, &self.source, &self.config)
            }
        }
    }

    pub fn summary(&self) -> Option<String> {
        match self.load {
            LoadState::Ready if !self.collection.is_empty() => {
                Some(view::result_summary(self.filtered().len(), self.collection.len()))
            }
            _ => None,
        }
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        let id = self.overlay.character_id()?;
        let character = self.collection.get(id)?;
        Some(view::detail_view(character, &self.source, &self.config))
    }

    // ------------------------------------------------------------------
    // Overlay
    // ------------------------------------------------------------------

    pub fn overlay(&self) -> &Overlay<H> {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay<H> {
        &mut self.overlay
    }

    pub fn archive(&self) -> &ArchiveListing {
        &self.archive
    }

    /// Background scrolling is disabled while the overlay is shown
    pub fn is_scroll_locked(&self) -> bool {
        matches!(self.overlay.phase(), OverlayPhase::Open | OverlayPhase::Closing)
    }

    /// Open the overlay for `id`. Unknown ids raise an error notification and
    /// leave the overlay untouched. Returns the session generation.
    pub fn open_character(&mut self, id: &str, trigger: Option<H>) -> Option<u64> {
        match self.overlay.open(&self.collection, id, trigger) {
            Ok(generation) => {
                self.archive = ArchiveListing::Loading;
                self.open_dropdown = None;
                Some(generation)
            }
            Err(e) => {
                self.notifications.push(e.to_string(), Severity::Error);
                None
            }
        }
    }

    pub fn activate_overlay(&mut self, focusables: &[Focusable]) -> bool {
        self.overlay.activate(focusables)
    }

    /// Start closing. Returns the generation to finalize.
    pub fn close_overlay(&mut self) -> Option<u64> {
        if self.overlay.request_close() {
            Some(self.overlay.generation())
        } else {
            None
        }
    }

    /// Finish closing; returns the trigger to refocus. Idempotent.
    pub fn finalize_overlay(&mut self, generation: u64) -> Option<H> {
        let done = self.overlay.finalize(generation);
        self.overlay_closed(done)
    }

    /// A transition ended on the overlay element; only its fade finishes a close.
    pub fn overlay_transition_ended(&mut self, generation: u64, property: &str) -> Option<H> {
        let done = self.overlay.transition_ended(generation, property);
        self.overlay_closed(done)
    }

    fn overlay_closed(&mut self, done: Option<Finalized<H>>) -> Option<H> {
        let done = done?;
        self.archive = ArchiveListing::Loading;
        tracing::debug!("Overlay for {} closed", done.character_id);
        done.trigger
    }

    /// Write an archive listing if its session is still the live one.
    pub fn archive_loaded(&mut self, generation: u64, result: GalleryResult<Vec<String>>) -> bool {
        if !self.overlay.accepts(generation) {
            tracing::debug!("Dropping archive listing for stale overlay session {}", generation);
            return false;
        }
        if let Err(e) = &result {
            tracing::error!("Archive listing failed: {}", e);
        }
        self.archive = ArchiveListing::from_result(result);
        true
    }

    /// Escape closes the overlay first, otherwise an open dropdown
    pub fn escape(&mut self) -> EscapeOutcome {
        if self.overlay.is_mounted() {
            return match self.close_overlay() {
                Some(generation) => EscapeOutcome::ClosedOverlay(generation),
                None => EscapeOutcome::Ignored,
            };
        }
        if self.close_dropdown() {
            EscapeOutcome::ClosedDropdown
        } else {
            EscapeOutcome::Ignored
        }
    }

    /// `/` may move focus to the search box only when no overlay is shown
    pub fn search_shortcut_allowed(&self) -> bool {
        !self.overlay.is_mounted()
    }

    // ------------------------------------------------------------------
    // Downloads & notifications
    // ------------------------------------------------------------------

    /// Plan a download, converting failure into an error notification.
    pub fn plan_download(
        &mut self,
        locator: Option<&str>,
        id: Option<&str>,
        display_name: &str,
    ) -> Option<DownloadPlan> {
        match download::plan_download(&self.collection, locator, id, display_name) {
            Ok(plan) => Some(plan),
            Err(e) => {
                self.notifications.push(e.to_string(), Severity::Error);
                None
            }
        }
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.notifications.push(message, severity)
    }

    pub fn begin_dismiss(&mut self, id: u64) {
        self.notifications.begin_dismiss(id);
    }

    pub fn remove_notification(&mut self, id: u64) {
        self.notifications.remove(id);
    }
}
