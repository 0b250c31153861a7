//! exploader: load experiment definitions from local files or HTTP(S) URLs.
//!
//! Documents are fetched, then parsed as JSON or YAML with a parser that
//! refuses YAML tags, so untrusted sources can only ever produce plain
//! mappings, sequences and scalars.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::{Loader, SettingsFile, load_settings};
pub use domain::{
    AppError, AuthDescriptor, AuthScheme, Document, InvalidSource, LoaderConfig, Settings,
};

/// Load an experiment from a local path or an http(s) URL using default
/// transport options.
pub fn load(reference: &str, settings: Option<&Settings>) -> Result<Document, InvalidSource> {
    load_with_config(reference, settings, &LoaderConfig::default())
}

/// Load an experiment with explicit transport options.
pub fn load_with_config(
    reference: &str,
    settings: Option<&Settings>,
    config: &LoaderConfig,
) -> Result<Document, InvalidSource> {
    Loader::new(config)?.load(reference, settings)
}

/// Load an experiment from a local file, skipping URL classification.
pub fn parse_from_file(path: impl AsRef<Path>) -> Result<Document, InvalidSource> {
    app::parse_local(path.as_ref())
}
