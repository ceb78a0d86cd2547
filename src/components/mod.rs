//! UI Components for the Character Gallery.

mod archive_panel;
mod character_card;
mod character_grid;
mod detail_overlay;
mod filter_bar;
mod toasts;

pub use archive_panel::ArchivePanel;
pub use character_card::CharacterCard;
pub use character_grid::CharacterGrid;
pub use detail_overlay::DetailOverlay;
pub use filter_bar::FilterBar;
pub use toasts::Toasts;
