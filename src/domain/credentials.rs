//! Per-host credential lookup.

use crate::domain::{AuthDescriptor, AuthScheme, Settings};

/// Find the credential configured for `host`.
///
/// The lookup is exact: no wildcard, suffix, or case folding. A descriptor
/// with the `none` scheme resolves to nothing.
pub fn resolve<'a>(host: &str, settings: Option<&'a Settings>) -> Option<&'a AuthDescriptor> {
    settings?
        .auths
        .as_ref()?
        .get(host)
        .filter(|auth| auth.scheme != AuthScheme::None)
}
