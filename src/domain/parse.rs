//! Safe deserialization of fetched payloads.
//!
//! YAML text is first scanned event by event and any tag, core (`!!`) or
//! local (`!`), is rejected. Only then is it deserialized into an untyped
//! node tree, so no tag can select what gets constructed.

use serde_yaml::Value as YamlValue;
use tracing::debug;
use yaml_rust2::parser::{Event, EventReceiver, Parser};

use crate::domain::{Document, DocumentFormat, FetchedPayload, InvalidSource};

/// Parse a payload, choosing the format from its content type and falling
/// back to the extension of `reference_hint`.
pub fn parse(payload: &FetchedPayload, reference_hint: &str) -> Result<Document, InvalidSource> {
    let format = DocumentFormat::resolve(payload.content_type.as_deref(), reference_hint)?;
    debug!(?format, hint = reference_hint, bytes = payload.bytes.len(), "Parsing experiment");

    match format {
        DocumentFormat::Json => parse_json(&payload.bytes),
        DocumentFormat::Yaml => parse_yaml(&payload.bytes),
    }
}

pub fn parse_json(bytes: &[u8]) -> Result<Document, InvalidSource> {
    serde_json::from_slice(bytes)
        .map(Document::from_trusted)
        .map_err(|err| InvalidSource::Json(err.to_string()))
}

pub fn parse_yaml(bytes: &[u8]) -> Result<Document, InvalidSource> {
    let text = std::str::from_utf8(bytes).map_err(|err| InvalidSource::Yaml(err.to_string()))?;
    reject_tags(text)?;

    let mut value: YamlValue =
        serde_yaml::from_str(text).map_err(|err| InvalidSource::Yaml(err.to_string()))?;
    ensure_plain(&value)?;
    value.apply_merge().map_err(|err| InvalidSource::Yaml(err.to_string()))?;

    let tree = serde_json::to_value(&value).map_err(|err| InvalidSource::Yaml(err.to_string()))?;
    Ok(Document::from_trusted(tree))
}

/// Records the first tag seen on any scalar, sequence or mapping node.
#[derive(Default)]
struct TagScan {
    found: Option<String>,
}

impl EventReceiver for TagScan {
    fn on_event(&mut self, event: Event) {
        if self.found.is_some() {
            return;
        }
        let tag = match event {
            Event::Scalar(_, _, _, tag) => tag,
            Event::SequenceStart(_, tag) | Event::MappingStart(_, tag) => tag,
            _ => None,
        };
        self.found = tag.map(|tag| format!("{}{}", tag.handle, tag.suffix));
    }
}

fn reject_tags(text: &str) -> Result<(), InvalidSource> {
    let mut scan = TagScan::default();
    Parser::new_from_str(text)
        .load(&mut scan, true)
        .map_err(|err| InvalidSource::Yaml(err.to_string()))?;

    match scan.found {
        Some(tag) => Err(InvalidSource::UnsafeYaml(tag)),
        None => Ok(()),
    }
}

/// Mapping keys must be strings and numbers finite, so the tree converts to
/// a document without renaming keys or dropping values.
fn ensure_plain(value: &YamlValue) -> Result<(), InvalidSource> {
    match value {
        YamlValue::Tagged(tagged) => Err(InvalidSource::UnsafeYaml(tagged.tag.to_string())),
        YamlValue::Sequence(items) => items.iter().try_for_each(ensure_plain),
        YamlValue::Mapping(mapping) => mapping.iter().try_for_each(|(key, value)| {
            if !key.is_string() {
                return Err(InvalidSource::Yaml(format!(
                    "mapping keys must be strings, found {}",
                    describe(key)
                )));
            }
            ensure_plain(value)
        }),
        YamlValue::Number(number) if number.is_nan() || number.is_infinite() => Err(
            InvalidSource::Yaml(format!("non-finite number {} is not supported", number)),
        ),
        YamlValue::Null | YamlValue::Bool(_) | YamlValue::Number(_) | YamlValue::String(_) => {
            Ok(())
        }
    }
}

fn describe(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => format!("'{}'", s),
        YamlValue::Sequence(_) => "a sequence".to_string(),
        YamlValue::Mapping(_) => "a mapping".to_string(),
        YamlValue::Tagged(tagged) => tagged.tag.to_string(),
    }
}
