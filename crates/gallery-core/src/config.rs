//! Runtime configuration for the gallery.
//!
//! Every fixed interval the UI relies on lives here so the desktop shell can
//! override them from a JSON file (`--config`).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GalleryResult;

/// Default location of the dataset, relative to the asset source.
pub const DEFAULT_DATASET_PATH: &str = "data/characters.json";

/// Image shown when a splash image fails to load.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "images/placeholder.webp";

/// Gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Dataset location, relative to the asset source
    pub dataset_path: String,
    /// Fallback image for cards whose splash fails to load
    pub placeholder_image: String,
    /// Quiet period before a search keystroke is applied
    pub search_debounce_ms: u64,
    /// Delay that keeps the loading indicator perceptible on filter changes
    pub filter_delay_ms: u64,
    /// How long to wait for the overlay's transition-end before finalizing
    pub close_fallback_ms: u64,
    /// How long a notification stays fully visible
    pub toast_visible_ms: u64,
    /// Exit animation length of a notification
    pub toast_exit_ms: u64,
    /// Maximum characters of description shown on a card
    pub card_description_limit: usize,
    /// Uploader name token that earns the verified mark
    pub verified_uploader: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            search_debounce_ms: 250,
            filter_delay_ms: 150,
            close_fallback_ms: 400,
            toast_visible_ms: 3000,
            toast_exit_ms: 300,
            card_description_limit: 120,
            verified_uploader: "official".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Load overrides from a JSON file; absent keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn filter_delay(&self) -> Duration {
        Duration::from_millis(self.filter_delay_ms)
    }

    pub fn close_fallback(&self) -> Duration {
        Duration::from_millis(self.close_fallback_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }
}
