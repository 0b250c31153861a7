use serde::Serialize;
use serde_json::Value;

/// Parsed experiment: a plain tree of scalars, sequences and mappings.
///
/// Only the safe parser builds documents, so holding one means the bytes
/// passed format resolution and tag rejection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Value);

impl Document {
    pub(crate) fn from_trusted(value: Value) -> Self {
        Self(value)
    }

    /// Top-level `title`, when the document is a mapping that has one.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
