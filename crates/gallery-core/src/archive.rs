//! Archive listing: names of the files inside a character's model archive.

use std::io::Cursor;

use crate::error::{GalleryError, GalleryResult};
use crate::source::AssetSource;

/// What the archive panel shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArchiveListing {
    #[default]
    Loading,
    Entries(Vec<String>),
    Empty,
    Failed(String),
}

impl ArchiveListing {
    /// Map a listing result onto the panel state.
    pub fn from_result(result: GalleryResult<Vec<String>>) -> Self {
        match result {
            Ok(entries) if entries.is_empty() => ArchiveListing::Empty,
            Ok(entries) => ArchiveListing::Entries(entries),
            Err(e) => ArchiveListing::Failed(format!("Unable to list archive contents: {}", e)),
        }
    }
}

/// Fetch an archive and list its file entries in archive order.
///
/// Fails with `Fetch` on a non-2xx response and `Decode` if the payload is
/// not a readable zip.
pub async fn list_entries(source: &AssetSource, locator: &str) -> GalleryResult<Vec<String>> {
    let response = source.fetch(locator).await?.error_for_status(locator)?;

    match response.content_type.as_deref() {
        Some(ct) if !looks_like_zip(ct) => {
            tracing::debug!("{} served as {}; decoding anyway", locator, ct);
        }
        None => tracing::debug!("{} has no content type; decoding anyway", locator),
        _ => {}
    }

    entries_from_bytes(&response.body)
}

/// List file entries of an in-memory zip; directories are skipped.
pub fn entries_from_bytes(bytes: &[u8]) -> GalleryResult<Vec<String>> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| GalleryError::Decode(e.to_string()))?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| GalleryError::Decode(e.to_string()))?;
        if !entry.is_dir() {
            names.push(entry.name().to_string());
        }
    }
    Ok(names)
}

fn looks_like_zip(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("zip") || ct.contains("octet-stream")
}
