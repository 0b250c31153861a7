//! Loader facade: fetch, then parse.

use std::path::Path;

use crate::app::fetcher::{SourceFetcher, read_local};
use crate::domain::{Document, InvalidSource, LoaderConfig, Settings, SourceRef, parse};
use crate::ports::HttpTransport;
use crate::services::ReqwestTransport;

/// Entry point for loading experiments.
///
/// Every failure surfaces as [`InvalidSource`] and no document is returned
/// unless both fetching and parsing succeeded.
#[derive(Debug, Clone)]
pub struct Loader<T: HttpTransport = ReqwestTransport> {
    fetcher: SourceFetcher<T>,
}

impl Loader<ReqwestTransport> {
    /// Create a loader backed by a reqwest client built from `config`.
    pub fn new(config: &LoaderConfig) -> Result<Self, InvalidSource> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }
}

impl<T: HttpTransport> Loader<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { fetcher: SourceFetcher::new(transport) }
    }

    /// Load an experiment from a local path or an http(s) URL.
    pub fn load(
        &self,
        reference: &str,
        settings: Option<&Settings>,
    ) -> Result<Document, InvalidSource> {
        let source = SourceRef::classify(reference)?;
        let payload = self.fetcher.fetch(&source, settings)?;
        parse::parse(&payload, &source.hint())
    }
}

/// Read and parse a local file, skipping URL classification; no transport
/// involved.
pub fn parse_local(path: &Path) -> Result<Document, InvalidSource> {
    let payload = read_local(path)?;
    parse::parse(&payload, &path.to_string_lossy())
}
