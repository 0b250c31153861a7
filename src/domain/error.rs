use std::io;

use thiserror::Error;

/// The single failure kind of the loading pipeline.
///
/// Every variant names its cause (path, URL and status, or parser
/// diagnostic) so callers can report it as-is.
#[derive(Debug, Error)]
pub enum InvalidSource {
    /// Local reference that does not point at a readable file.
    #[error("Path \"{0}\" does not exist.")]
    PathNotFound(String),

    /// Reference written as a URL with a scheme other than http/https.
    #[error("'{0}' is not a supported source scheme.")]
    UnsupportedScheme(String),

    /// Remote server answered outside the 2xx range.
    #[error("Failed to fetch the experiment from {url}: {status} {reason}")]
    HttpStatus { url: String, status: u16, reason: String },

    /// Request could not be sent or the body could not be received.
    #[error("Failed to fetch the experiment from {url}: {message}")]
    Transport { url: String, message: String },

    /// Remote reference that cannot be turned into a request.
    #[error("Invalid experiment URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed from the loader configuration.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Local file exists but could not be read.
    #[error("Failed to read experiment file \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Neither content type nor extension selects a parser.
    #[error("only files with json, yaml or yml extensions are supported")]
    UnsupportedFormat,

    #[error("Failed parsing JSON experiment: {0}")]
    Json(String),

    #[error("Failed parsing YAML experiment: {0}")]
    Yaml(String),

    /// YAML document requested construction of a tagged value.
    #[error("YAML tag '{0}' is not allowed in an experiment")]
    UnsafeYaml(String),
}

/// Error type for the command-line and settings layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    InvalidSource(#[from] InvalidSource),

    /// Settings file path given but nothing there.
    #[error("Settings file not found: {0}")]
    SettingsMissing(String),

    /// Settings file could not be deserialized.
    #[error("Malformed settings file {path}: {reason}")]
    SettingsParse { path: String, reason: String },

    /// Parsed document could not be rendered.
    #[error("Failed to render experiment: {0}")]
    Output(String),
}
