//! Source fetching: local reads and authenticated remote GETs.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;
use url::Url;

use crate::domain::{
    ACCEPT, FetchedPayload, InvalidSource, Settings, SourceRef, credentials,
};
use crate::ports::{FetchRequest, HttpTransport};

/// Turns a classified source into raw bytes and a declared content type.
#[derive(Debug, Clone)]
pub struct SourceFetcher<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> SourceFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn fetch(
        &self,
        source: &SourceRef,
        settings: Option<&Settings>,
    ) -> Result<FetchedPayload, InvalidSource> {
        match source {
            SourceRef::Local(path) => read_local(path),
            SourceRef::Remote(url) => self.fetch_remote(url, settings),
        }
    }

    fn fetch_remote(
        &self,
        url: &Url,
        settings: Option<&Settings>,
    ) -> Result<FetchedPayload, InvalidSource> {
        let request = build_request(url, settings)?;
        info!(url = %url, authenticated = request.authorization.is_some(), "Fetching experiment");
        self.transport.get(&request)
    }
}

/// Read a local experiment file in full.
pub fn read_local(path: &Path) -> Result<FetchedPayload, InvalidSource> {
    let not_found = || InvalidSource::PathNotFound(path.display().to_string());
    if !path.is_file() {
        return Err(not_found());
    }

    info!(path = %path.display(), "Loading experiment");
    match fs::read(path) {
        Ok(bytes) => Ok(FetchedPayload::local(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(not_found()),
        Err(source) => Err(InvalidSource::Read { path: path.display().to_string(), source }),
    }
}

/// Build the GET request for `url`, attaching the credential configured for
/// its host. An explicit port is tried as `host:port` before the bare host.
pub fn build_request(url: &Url, settings: Option<&Settings>) -> Result<FetchRequest, InvalidSource> {
    let host = url.host_str().ok_or_else(|| InvalidSource::InvalidUrl {
        url: url.to_string(),
        reason: "URL has no host".to_string(),
    })?;

    let auth = url
        .port()
        .and_then(|port| credentials::resolve(&format!("{}:{}", host, port), settings))
        .or_else(|| credentials::resolve(host, settings));

    Ok(FetchRequest {
        url: url.clone(),
        accept: ACCEPT.to_string(),
        authorization: auth.map(|auth| auth.header_value()),
    })
}
