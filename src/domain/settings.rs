//! Caller-supplied settings consumed by the loader.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Loader settings. Only the `auths` section is read here; other sections
/// of a settings file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Credentials keyed by exact hostname (or `host:port`).
    #[serde(default)]
    pub auths: Option<BTreeMap<String, AuthDescriptor>>,
}

impl Settings {
    /// Settings with a single credential, mostly useful for callers that
    /// do not read a settings file.
    pub fn with_auth(host: impl Into<String>, auth: AuthDescriptor) -> Self {
        let mut auths = BTreeMap::new();
        auths.insert(host.into(), auth);
        Self { auths: Some(auths) }
    }
}

/// Authentication attached to requests for one host.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthDescriptor {
    #[serde(rename = "type")]
    pub scheme: AuthScheme,
    pub value: String,
}

impl AuthDescriptor {
    pub fn new(scheme: AuthScheme, value: impl Into<String>) -> Self {
        Self { scheme, value: value.into() }
    }

    pub fn bearer(value: impl Into<String>) -> Self {
        Self::new(AuthScheme::Bearer, value)
    }

    /// `Authorization` header value, formatted `<type> <value>`.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.value)
    }
}

impl fmt::Debug for AuthDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthDescriptor")
            .field("scheme", &self.scheme)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Authorization scheme of an [`AuthDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AuthScheme {
    Bearer,
    Basic,
    /// Explicitly send no `Authorization` header for the host.
    None,
    /// Any other scheme, kept verbatim.
    Other(String),
}

impl From<String> for AuthScheme {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "bearer" => AuthScheme::Bearer,
            "basic" => AuthScheme::Basic,
            "none" => AuthScheme::None,
            _ => AuthScheme::Other(raw),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Bearer => f.write_str("bearer"),
            AuthScheme::Basic => f.write_str("basic"),
            AuthScheme::None => f.write_str("none"),
            AuthScheme::Other(raw) => f.write_str(raw),
        }
    }
}
