//! Classification of source references.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::InvalidSource;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    Local(PathBuf),
    Remote(Url),
}

impl SourceRef {
    /// Classify a raw reference.
    ///
    /// `http`/`https` URLs are remote. Anything else written as
    /// `<scheme>://...` is rejected; everything left is a local path.
    pub fn classify(reference: &str) -> Result<Self, InvalidSource> {
        if let Ok(url) = Url::parse(reference) {
            match url.scheme() {
                "http" | "https" => return Ok(SourceRef::Remote(url)),
                scheme if reference.contains("://") => {
                    return Err(InvalidSource::UnsupportedScheme(scheme.to_string()));
                }
                // Drive letters such as `C:\` parse as a one-letter scheme.
                _ => {}
            }
        }
        Ok(SourceRef::Local(PathBuf::from(reference)))
    }

    /// Path-like hint used for extension-based format detection.
    pub fn hint(&self) -> Cow<'_, str> {
        match self {
            SourceRef::Local(path) => path.to_string_lossy(),
            SourceRef::Remote(url) => Cow::Borrowed(url.path()),
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            SourceRef::Local(path) => Some(path),
            SourceRef::Remote(_) => None,
        }
    }
}
