//! View models: pure functions from state to what the UI draws.
//!
//! Components never look at raw records; they map these structures to
//! elements, which keeps every rendering decision testable without a UI.

use crate::config::GalleryConfig;
use crate::source::AssetSource;
use crate::types::{Character, Collection};

/// One card in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub fallback_image: String,
    pub rarity: Option<String>,
    pub element: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
}

/// Observable states of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Loading,
    LoadFailed(String),
    /// Dataset loaded but holds no records: terminal error state
    DatasetEmpty,
    /// Filters exclude everything
    NoResults,
    Cards(Vec<CardView>),
}

/// One labelled attribution row in the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRow {
    pub label: &'static str,
    pub value: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionView {
    pub key: String,
    pub name: String,
    pub description: String,
}

/// Content of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub heading: String,
    pub image: String,
    pub fallback_image: String,
    pub rarity: Option<String>,
    pub element: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    pub model_info: Option<String>,
    pub meta: Vec<MetaRow>,
    pub inclusions: Vec<InclusionView>,
    pub archive_locator: String,
}

/// `★` repeated `rarity` times; nothing for zero or absent
pub fn rarity_stars(rarity: Option<u8>) -> Option<String> {
    match rarity {
        Some(n) if n > 0 => Some("★".repeat(n as usize)),
        _ => None,
    }
}

/// Trim whitespace and cut to `limit` characters with an ellipsis.
pub fn truncate_description(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}

/// Case-insensitive whole-word match of `token` in `text`
pub fn contains_word(text: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let token = token.to_lowercase();
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word.to_lowercase() == token)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn card_view(character: &Character, source: &AssetSource, config: &GalleryConfig) -> CardView {
    CardView {
        id: character.id.clone(),
        name: character.display_name().to_string(),
        image: source.resolve(&character.splash_locator()),
        fallback_image: source.resolve(&config.placeholder_image),
        rarity: rarity_stars(character.rarity),
        element: non_empty(character.element.as_deref()),
        path: non_empty(character.path.as_deref()),
        description: non_empty(character.description.as_deref())
            .map(|d| truncate_description(&d, config.card_description_limit)),
    }
}

/// Grid state for a loaded dataset and its filtered view
pub fn grid_view(
    collection: &Collection,
    filtered: &[&Character],
    source: &AssetSource,
    config: &GalleryConfig,
) -> GridView {
    if collection.is_empty() {
        GridView::DatasetEmpty
    } else if filtered.is_empty() {
        GridView::NoResults
    } else {
        GridView::Cards(
            filtered
                .iter()
                .map(|c| card_view(c, source, config))
                .collect(),
        )
    }
}

/// "Showing N of M characters"
pub fn result_summary(shown: usize, total: usize) -> String {
    if shown == total {
        format!("Showing all {} characters", total)
    } else {
        format!("Showing {} of {} characters", shown, total)
    }
}

pub fn detail_view(character: &Character, source: &AssetSource, config: &GalleryConfig) -> DetailView {
    let mut meta = Vec::new();
    if let Some(v) = non_empty(character.meta.voice_actor.as_deref()) {
        meta.push(MetaRow {
            label: "Voice Actor",
            value: v,
            verified: false,
        });
    }
    if let Some(v) = non_empty(character.meta.upload_date.as_deref()) {
        meta.push(MetaRow {
            label: "Uploaded",
            value: v,
            verified: false,
        });
    }
    if let Some(v) = non_empty(character.meta.uploader.as_deref()) {
        let verified = contains_word(&v, &config.verified_uploader);
        meta.push(MetaRow {
            label: "Uploader",
            value: v,
            verified,
        });
    }

    let inclusions = character
        .inclusions
        .iter()
        .enumerate()
        .map(|(i, inc)| InclusionView {
            key: inc.id.clone().unwrap_or_else(|| format!("{}-{}", character.id, i)),
            name: inc.name.clone(),
            description: inc.description.clone(),
        })
        .collect();

    DetailView {
        id: character.id.clone(),
        heading: character.display_name().to_string(),
        image: source.resolve(&character.splash_locator()),
        fallback_image: source.resolve(&config.placeholder_image),
        rarity: rarity_stars(character.rarity),
        element: non_empty(character.element.as_deref()),
        path: non_empty(character.path.as_deref()),
        description: non_empty(character.description.as_deref()),
        model_info: non_empty(character.model_info.as_deref()),
        meta,
        inclusions,
        archive_locator: character.archive_locator(),
    }
}
