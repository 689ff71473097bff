//! Pages served by the benchmark.
//!
//! Two documents exist: the plain index page and the page that is patched in
//! over the event stream. Both are compiled into the binary; a configured
//! directory can replace them at startup. Either way they are read once and
//! shared read-only for the life of the process.

use axum::body::Bytes;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::AssetsConfig;
use crate::error::{Error, Result};

/// File name of the plain index page
pub const INDEX_FILE: &str = "index.html";

/// File name of the page sent as a patch event
pub const SSE_FILE: &str = "sse.html";

const EMBEDDED_INDEX: &str = include_str!("../assets/index.html");
const EMBEDDED_SSE: &str = include_str!("../assets/sse.html");

/// An immutable UTF-8 page.
///
/// Cloning is cheap; the bytes are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    bytes: Bytes,
}

impl Document {
    /// Wrap a page compiled into the binary
    #[must_use]
    pub const fn from_static(text: &'static str) -> Self {
        Self {
            bytes: Bytes::from_static(text.as_bytes()),
        }
    }

    /// Raw bytes, as written to the response body
    #[must_use]
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Page text
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        // Only built from `&str`/`String`, so this never replaces anything.
        String::from_utf8_lossy(&self.bytes)
    }

    /// Length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the page is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self {
            bytes: Bytes::from(text),
        }
    }
}

/// Where the pages were loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Compiled into the binary
    Embedded,
    /// Read from a directory at startup
    Directory(PathBuf),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// The pair of pages the routes serve
#[derive(Debug, Clone)]
pub struct Assets {
    /// Plain index page
    pub index: Document,
    /// Page patched in over `/sse`
    pub sse: Document,
    /// Origin of both pages
    pub source: AssetSource,
}

impl Assets {
    /// Pages compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            index: Document::from_static(EMBEDDED_INDEX),
            sse: Document::from_static(EMBEDDED_SSE),
            source: AssetSource::Embedded,
        }
    }

    /// Load pages according to configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Asset`] if a configured page cannot be read.
    pub async fn load(config: &AssetsConfig) -> Result<Self> {
        let assets = match &config.dir {
            Some(dir) => Self::from_dir(dir).await?,
            None => Self::embedded(),
        };

        tracing::info!(
            source = %assets.source,
            index_bytes = assets.index.len(),
            sse_bytes = assets.sse.len(),
            "Pages loaded"
        );

        Ok(assets)
    }

    /// Read `index.html` and `sse.html` from `dir`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Asset`] if either file is missing or not valid UTF-8.
    pub async fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let index = read_document(dir.join(INDEX_FILE)).await?;
        let sse = read_document(dir.join(SSE_FILE)).await?;

        Ok(Self {
            index,
            sse,
            source: AssetSource::Directory(dir),
        })
    }
}

async fn read_document(path: PathBuf) -> Result<Document> {
    let read_path = path.clone();
    let text = tokio::task::spawn_blocking(move || std::fs::read_to_string(&read_path))
        .await
        .map_err(|e| Error::Internal(format!("Task join error: {}", e)))?
        .map_err(|source| Error::Asset { path, source })?;

    Ok(Document::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_embedded_pages() {
        let assets = Assets::embedded();
        assert_eq!(assets.source, AssetSource::Embedded);
        assert_eq!(assets.index.bytes(), EMBEDDED_INDEX.as_bytes());
        assert_eq!(assets.sse.text(), EMBEDDED_SSE);
        assert!(assets.index.text().contains("<html"));
        assert!(assets.sse.text().contains("id=\"content\""));
    }

    #[tokio::test]
    async fn test_load_without_dir_uses_embedded() {
        let assets = Assets::load(&AssetsConfig::default()).await.unwrap();
        assert_eq!(assets.source, AssetSource::Embedded);
    }

    #[tokio::test]
    async fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<p>index</p>").unwrap();
        fs::write(dir.path().join(SSE_FILE), "<p id=\"content\">sse</p>\n").unwrap();

        let config = AssetsConfig {
            dir: Some(dir.path().to_path_buf()),
        };
        let assets = Assets::load(&config).await.unwrap();

        assert_eq!(assets.index.text(), "<p>index</p>");
        assert_eq!(assets.sse.bytes(), "<p id=\"content\">sse</p>\n".as_bytes());
        assert_eq!(assets.source, AssetSource::Directory(dir.path().to_path_buf()));
    }

    #[tokio::test]
    async fn test_missing_page_is_an_asset_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<p>index</p>").unwrap();

        let err = Assets::from_dir(dir.path()).await.unwrap_err();
        match err {
            Error::Asset { path, source } => {
                assert_eq!(path, dir.path().join(SSE_FILE));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join(SSE_FILE), "<p></p>").unwrap();

        let err = Assets::from_dir(dir.path()).await.unwrap_err();
        assert!(matches!(err, Error::Asset { .. }));
    }
}
