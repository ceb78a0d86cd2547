//! Asset source: where the dataset, images and archives come from.
//!
//! All locators in the dataset are relative. An `AssetSource` resolves them
//! against a base, which is either an HTTP(S) URL, a local directory, or an
//! in-memory table of fixtures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

use crate::error::{GalleryError, GalleryResult};

/// Outcome of a fetch that reached the other side.
///
/// Non-success statuses are returned, not raised; callers decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResponse {
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: Bytes::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into a `Fetch` error.
    pub fn error_for_status(self, locator: &str) -> GalleryResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(GalleryError::Fetch {
                locator: locator.to_string(),
                status: self.status,
            })
        }
    }
}

/// Where relative locators are resolved.
#[derive(Debug, Clone)]
pub enum AssetSource {
    /// Remote base URL, e.g. `https://example.org/gallery/`
    Http { base: reqwest::Url, client: reqwest::Client },
    /// Local directory
    Directory(PathBuf),
    /// In-memory table keyed by locator
    Static(Arc<HashMap<String, FetchResponse>>),
}

impl PartialEq for AssetSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AssetSource::Http { base: a, .. }, AssetSource::Http { base: b, .. }) => a == b,
            (AssetSource::Directory(a), AssetSource::Directory(b)) => a == b,
            (AssetSource::Static(a), AssetSource::Static(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn is_absolute_url(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

impl AssetSource {
    /// Build a source from a command-line style base: URLs become `Http`,
    /// anything else is treated as a directory.
    pub fn from_base(base: &str) -> GalleryResult<Self> {
        if is_absolute_url(base) {
            let mut base = base.to_string();
            if !base.ends_with('/') {
                base.push('/');
            }
            let base = reqwest::Url::parse(&base)
                .map_err(|e| GalleryError::Load(format!("invalid base URL {}: {}", base, e)))?;
            Ok(AssetSource::Http {
                base,
                client: reqwest::Client::new(),
            })
        } else {
            Ok(AssetSource::Directory(PathBuf::from(base)))
        }
    }

    pub fn directory(path: impl AsRef<Path>) -> Self {
        AssetSource::Directory(path.as_ref().to_path_buf())
    }

    pub fn fixtures(entries: impl IntoIterator<Item = (String, FetchResponse)>) -> Self {
        AssetSource::Static(Arc::new(entries.into_iter().collect()))
    }

    /// Displayable address for a locator (used for `img` sources).
    pub fn resolve(&self, locator: &str) -> String {
        if is_absolute_url(locator) {
            return locator.to_string();
        }
        match self {
            AssetSource::Http { base, .. } => base
                .join(locator)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| locator.to_string()),
            AssetSource::Directory(root) => root.join(locator).to_string_lossy().into_owned(),
            AssetSource::Static(_) => locator.to_string(),
        }
    }

    /// Fetch a locator.
    ///
    /// Returns `Ok` for any response that arrived, including 4xx/5xx; a missing
    /// file in a directory source is reported as 404.
    pub async fn fetch(&self, locator: &str) -> GalleryResult<FetchResponse> {
        if is_absolute_url(locator) {
            let client = match self {
                AssetSource::Http { client, .. } => client.clone(),
                _ => reqwest::Client::new(),
            };
            return fetch_http(&client, locator).await;
        }

        match self {
            AssetSource::Http { base, client } => {
                let url = base.join(locator).map_err(|e| GalleryError::Locator {
                    locator: locator.to_string(),
                    reason: e.to_string(),
                })?;
                fetch_http(client, url.as_str()).await
            }
            AssetSource::Directory(root) => {
                let path = root.join(locator);
                match tokio::fs::read(&path).await {
                    Ok(data) => Ok(FetchResponse {
                        status: 200,
                        content_type: guess_content_type(&path),
                        body: Bytes::from(data),
                    }),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        tracing::debug!("{} not found under {:?}", locator, root);
                        Ok(FetchResponse::with_status(404))
                    }
                    Err(e) => Err(e.into()),
                }
            }
            AssetSource::Static(table) => Ok(table
                .get(locator)
                .cloned()
                .unwrap_or_else(|| FetchResponse::with_status(404))),
        }
    }
}

async fn fetch_http(client: &reqwest::Client, url: &str) -> GalleryResult<FetchResponse> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?;

    Ok(FetchResponse {
        status,
        content_type,
        body,
    })
}

fn guess_content_type(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "json" => "application/json",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => return None,
    };
    Some(mime.to_string())
}
