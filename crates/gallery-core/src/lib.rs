//! Character Gallery Core Library
//!
//! Everything behind the gallery UI that does not depend on a UI toolkit:
//! loading the character dataset, filtering it, deriving filter options,
//! the detail-overlay state machine and focus trap, archive listing,
//! download planning and the notification center.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gallery_core::{AppState, AssetSource, GalleryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GalleryConfig::default();
//!     let source = AssetSource::from_base("./site")?;
//!     let mut state: AppState<()> = AppState::new(config.clone(), source.clone());
//!
//!     state.loaded(gallery_core::loader::load(&source, &config.dataset_path).await);
//!
//!     let ticket = state.input_search("ael");
//!     state.commit(ticket);
//!     for character in state.filtered() {
//!         println!("{}: {}", character.id, character.display_name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod config;
pub mod debounce;
pub mod download;
pub mod error;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod notify;
pub mod options;
pub mod overlay;
pub mod source;
pub mod state;
pub mod types;
pub mod view;

// Re-exports
pub use archive::ArchiveListing;
pub use config::GalleryConfig;
pub use debounce::{Debouncer, Ticket};
pub use download::DownloadPlan;
pub use error::{ErrorKind, GalleryError, GalleryResult};
pub use filter::{Facet, FilterState};
pub use notify::{Notification, Notifications, Severity};
pub use options::{FacetOptions, FilterOption};
pub use overlay::{FocusTrap, Focusable, Overlay, OverlayPhase, FADE_PROPERTY};
pub use source::{AssetSource, FetchResponse};
pub use state::{AppState, EscapeOutcome, LoadState};
pub use types::*;
pub use view::{CardView, DetailView, GridView};
