//! Download planning and saving.

use std::path::{Path, PathBuf};

use crate::error::{GalleryError, GalleryResult};
use crate::source::AssetSource;
use crate::types::Collection;

/// What to fetch and what to call it on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    pub locator: String,
    pub file_name: String,
}

/// Resolve the locator and file name for a download.
///
/// The record is the one with `id` when the caller knows it. Otherwise it is
/// the first record named `display_name`, and failing that the first record of
/// the collection. An explicit `locator` overrides the record's archive.
pub fn plan_download(
    collection: &Collection,
    locator: Option<&str>,
    id: Option<&str>,
    display_name: &str,
) -> GalleryResult<DownloadPlan> {
    let record = id
        .and_then(|id| collection.get(id))
        .or_else(|| collection.find_by_name(display_name))
        .or_else(|| collection.first());

    let locator = match locator.filter(|l| !l.is_empty()) {
        Some(l) => l.to_string(),
        None => record
            .map(|r| r.archive_locator())
            .ok_or_else(|| GalleryError::DownloadInitiation("no archive to download".to_string()))?,
    };

    let id = record.map(|r| r.id.as_str()).unwrap_or("model");
    let stem = sanitize_file_name(display_name);
    let file_name = if stem.is_empty() {
        format!("{}.zip", id)
    } else {
        format!("{}_{}.zip", stem, id)
    };

    Ok(DownloadPlan { locator, file_name })
}

/// Lowercase, whitespace runs to `_`, keep only `[a-z0-9_-]`.
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
        }
    }
    out
}

/// Fetch the planned archive and write it to `destination`.
pub async fn save_download(
    source: &AssetSource,
    plan: &DownloadPlan,
    destination: &Path,
) -> GalleryResult<PathBuf> {
    let response = source
        .fetch(&plan.locator)
        .await
        .and_then(|r| r.error_for_status(&plan.locator))
        .map_err(|e| GalleryError::DownloadInitiation(e.to_string()))?;

    tokio::fs::write(destination, &response.body)
        .await
        .map_err(|e| GalleryError::DownloadInitiation(format!("{}: {}", destination.display(), e)))?;

    tracing::info!(
        "Saved {} ({} bytes) to {}",
        plan.locator,
        response.body.len(),
        destination.display()
    );
    Ok(destination.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assets, Character};

    fn collection() -> Collection {
        Collection::new(vec![
            Character {
                id: "1".into(),
                name: Some("Aela".into()),
                ..Default::default()
            },
            Character {
                id: "2".into(),
                name: Some("Bron the Bold".into()),
                assets: Assets {
                    model_download: Some("cdn/bron.zip".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
        ])
    }

    #[test]
    fn sanitizes_names() {
        assert_eq!(sanitize_file_name("Bron the  Bold"), "bron_the_bold");
        assert_eq!(sanitize_file_name("Aéla (v2)!"), "ala_v2");
        assert_eq!(sanitize_file_name("  "), "");
    }

    #[test]
    fn explicit_locator_wins() {
        let plan = plan_download(&collection(), Some("x/y.zip"), None, "Aela").unwrap();
        assert_eq!(plan.locator, "x/y.zip");
        assert_eq!(plan.file_name, "aela_1.zip");
    }

    #[test]
    fn resolves_by_name() {
        let plan = plan_download(&collection(), None, None, "Bron the Bold").unwrap();
        assert_eq!(plan.locator, "cdn/bron.zip");
        assert_eq!(plan.file_name, "bron_the_bold_2.zip");
    }

    #[test]
    fn falls_back_to_first_record() {
        let plan = plan_download(&collection(), None, None, "Nobody").unwrap();
        assert_eq!(plan.locator, "models/1.zip");
        assert_eq!(plan.file_name, "nobody_1.zip");
    }

    #[test]
    fn known_id_picks_its_own_record() {
        let collection = Collection::new(vec![
            Character {
                id: "1".into(),
                name: Some("Aela".into()),
                ..Default::default()
            },
            Character {
                id: "7".into(),
                ..Default::default()
            },
        ]);

        let card = plan_download(&collection, None, Some("7"), "Unknown Character").unwrap();
        assert_eq!(card.locator, "models/7.zip");
        assert_eq!(card.file_name, "unknown_character_7.zip");

        let overlay = plan_download(&collection, Some("models/7.zip"), Some("7"), "Unknown Character").unwrap();
        assert_eq!(overlay, card);
    }

    #[test]
    fn repeated_names_resolve_by_id() {
        let collection = Collection::new(vec![
            Character {
                id: "1".into(),
                name: Some("Aela".into()),
                ..Default::default()
            },
            Character {
                id: "2".into(),
                name: Some("Aela".into()),
                ..Default::default()
            },
        ]);
        let plan = plan_download(&collection, None, Some("2"), "Aela").unwrap();
        assert_eq!(plan.locator, "models/2.zip");
        assert_eq!(plan.file_name, "aela_2.zip");
    }

    #[test]
    fn unknown_id_falls_back_to_name() {
        let plan = plan_download(&collection(), None, Some("99"), "Bron the Bold").unwrap();
        assert_eq!(plan.file_name, "bron_the_bold_2.zip");
    }

    #[test]
    fn empty_collection_without_locator_fails() {
        let err = plan_download(&Collection::default(), None, None, "Aela").unwrap_err();
        assert!(matches!(err, GalleryError::DownloadInitiation(_)));
    }
}
