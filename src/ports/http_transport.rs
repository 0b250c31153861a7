//! HTTP transport port definition.

use url::Url;

use crate::domain::{FetchedPayload, InvalidSource};

/// A fully prepared GET request for a remote experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: Url,
    /// Value of the `Accept` header.
    pub accept: String,
    /// Value of the `Authorization` header, when a credential resolved.
    pub authorization: Option<String>,
}

/// Port for issuing the single GET of a remote fetch.
///
/// Implementations must fail with [`InvalidSource`] on any status outside
/// 200-299 and on transport errors, and must not retry.
pub trait HttpTransport {
    fn get(&self, request: &FetchRequest) -> Result<FetchedPayload, InvalidSource>;
}
