//! Error types for the Character Gallery

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Dataset was unreachable or did not contain a character list
    #[error("Failed to load characters: {0}")]
    Load(String),

    /// A card referenced a character id that is not in the collection
    #[error("Character not found: {0}")]
    NotFound(String),

    /// Network (or file) request finished with a non-success status
    #[error("Request for {locator} failed with status {status}")]
    Fetch { locator: String, status: u16 },

    /// Relative locator could not be resolved against the asset base
    #[error("Invalid locator {locator}: {reason}")]
    Locator { locator: String, reason: String },

    /// Archive payload could not be parsed
    #[error("Could not read archive: {0}")]
    Decode(String),

    /// Download could not be planned or written
    #[error("Download failed: {0}")]
    DownloadInitiation(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level HTTP error (connection refused, bad URL, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Zip container error
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Coarse classification used by the UI to pick where an error is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fatal to the initial render; shown as a full-grid error state
    Load,
    /// Recoverable; notification only
    NotFound,
    /// Recoverable; shown inside the archive panel
    Fetch,
    /// Recoverable; shown inside the archive panel
    Decode,
    /// Recoverable; notification only
    Download,
}

impl GalleryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GalleryError::Load(_) | GalleryError::Json(_) => ErrorKind::Load,
            GalleryError::NotFound(_) => ErrorKind::NotFound,
            GalleryError::Fetch { .. }
            | GalleryError::Locator { .. }
            | GalleryError::Http(_)
            | GalleryError::Io(_) => ErrorKind::Fetch,
            GalleryError::Decode(_) | GalleryError::Zip(_) => ErrorKind::Decode,
            GalleryError::DownloadInitiation(_) => ErrorKind::Download,
        }
    }

    /// Status code carried by a failed fetch, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GalleryError::Fetch { status, .. } => Some(*status),
            GalleryError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
