//! Blocking HTTP transport implemented with reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::domain::{FetchedPayload, InvalidSource, LoaderConfig};
use crate::ports::{FetchRequest, HttpTransport};

/// reqwest-backed [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &LoaderConfig) -> Result<Self, InvalidSource> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!config.verify_tls);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| InvalidSource::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, request: &FetchRequest) -> Result<FetchedPayload, InvalidSource> {
        let url = request.url.as_str();
        let transport_error = |e: reqwest::Error| InvalidSource::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let mut builder = self.client.get(request.url.clone()).header(ACCEPT, &request.accept);
        if let Some(authorization) = &request.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        let response = builder.send().map_err(transport_error)?;
        let status = response.status();

        if !status.is_success() {
            debug!(url, status = status.as_u16(), "Experiment fetch rejected");
            return Err(InvalidSource::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown status").to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().map_err(transport_error)?;
        debug!(url, content_type = ?content_type, bytes = bytes.len(), "Fetched experiment");

        Ok(FetchedPayload::remote(bytes.to_vec(), content_type))
    }
}
