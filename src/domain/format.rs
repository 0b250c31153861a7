//! Parser selection from content type and file extension.

use std::path::Path;

use crate::domain::InvalidSource;

/// Accept header sent with every remote fetch.
pub const ACCEPT: &str = "application/json, application/x-yaml";

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format for a payload.
    ///
    /// A recognized content type wins over the extension of `hint`.
    /// `text/plain` is only consulted when the extension says nothing, and
    /// is read as YAML since YAML also accepts JSON documents.
    pub fn resolve(content_type: Option<&str>, hint: &str) -> Result<Self, InvalidSource> {
        let media_type = content_type.map(primary_media_type);

        if let Some(format) = media_type.as_deref().and_then(Self::from_media_type) {
            return Ok(format);
        }
        if let Some(format) = Self::from_extension(hint) {
            return Ok(format);
        }
        if media_type.as_deref() == Some("text/plain") {
            return Ok(DocumentFormat::Yaml);
        }
        Err(InvalidSource::UnsupportedFormat)
    }

    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "application/json" | "text/json" => Some(DocumentFormat::Json),
            "application/x-yaml" | "application/yaml" | "text/yaml" | "text/x-yaml" => {
                Some(DocumentFormat::Yaml)
            }
            other if other.ends_with("+json") => Some(DocumentFormat::Json),
            other if other.ends_with("+yaml") => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_extension(hint: &str) -> Option<Self> {
        let extension = Path::new(hint).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// `application/json; charset=utf-8` -> `application/json`
fn primary_media_type(content_type: &str) -> String {
    content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parameters_are_ignored() {
        let format =
            DocumentFormat::resolve(Some("Application/JSON; charset=utf-8"), "/experiment").unwrap();
        assert_eq!(format, DocumentFormat::Json);
    }

    #[test]
    fn yaml_family_media_types() {
        for media_type in
            ["application/x-yaml", "application/yaml", "text/yaml", "application/vnd.exp+yaml"]
        {
            assert_eq!(
                DocumentFormat::resolve(Some(media_type), "").unwrap(),
                DocumentFormat::Yaml,
                "{media_type}"
            );
        }
    }

    #[test]
    fn extension_is_used_without_content_type() {
        assert_eq!(DocumentFormat::resolve(None, "e.json").unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::resolve(None, "dir/e.YML").unwrap(), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::resolve(None, "e.yaml").unwrap(), DocumentFormat::Yaml);
    }

    #[test]
    fn unrecognized_content_type_falls_back_to_extension() {
        let format = DocumentFormat::resolve(Some("application/octet-stream"), "/e.yml").unwrap();
        assert_eq!(format, DocumentFormat::Yaml);
    }

    #[test]
    fn content_type_wins_over_conflicting_extension() {
        let format = DocumentFormat::resolve(Some("application/x-yaml"), "/e.json").unwrap();
        assert_eq!(format, DocumentFormat::Yaml);
    }

    #[test]
    fn text_plain_only_applies_when_extension_is_silent() {
        assert_eq!(
            DocumentFormat::resolve(Some("text/plain"), "/experiment").unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::resolve(Some("text/plain"), "/e.json").unwrap(),
            DocumentFormat::Json
        );
    }

    #[test]
    fn unresolved_format_is_rejected() {
        let err = DocumentFormat::resolve(None, "/tmp/xyuzye.txt").unwrap_err();
        assert!(matches!(err, InvalidSource::UnsupportedFormat));
    }
}
