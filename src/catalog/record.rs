// Mon Jan 19 2026 - Alex

use crate::catalog::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const AUTHOR_SECTIONS: &[&str] = &[
    "basics",
    "indices",
    "counts",
    "coauthors",
    "publications",
    "public_access",
];

pub const CONTAINER_TYPE_KEY: &str = "container_type";
pub const FILLED_KEY: &str = "filled";
pub const BIB_KEY: &str = "bib";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Author,
    Publication,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Author => "Author",
            RecordKind::Publication => "Publication",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Author" => Some(RecordKind::Author),
            "Publication" => Some(RecordKind::Publication),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record exactly as the catalog hands it back: an untyped JSON object.
///
/// Authors carry `filled` as a list of populated sections, publications carry
/// it as a boolean. Bibliographic fields of a publication live under `bib`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn from_value(value: Value) -> CatalogResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CatalogError::Malformed(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn container_type(&self) -> Option<&str> {
        self.get_str(CONTAINER_TYPE_KEY)
    }

    pub fn kind(&self) -> Option<RecordKind> {
        self.container_type().and_then(RecordKind::parse)
    }

    pub fn filled_sections(&self) -> Vec<&str> {
        match self.0.get(FILLED_KEY) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn covers_sections(&self, sections: &[&str]) -> bool {
        let filled = self.filled_sections();
        sections.iter().all(|section| filled.contains(section))
    }

    pub fn is_filled(&self) -> bool {
        match self.0.get(FILLED_KEY) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Array(items)) => !items.is_empty(),
            _ => false,
        }
    }

    pub fn mark_sections_filled(&mut self, sections: &[&str]) {
        let list = sections.iter().map(|s| Value::String(s.to_string())).collect();
        self.0.insert(FILLED_KEY.to_string(), Value::Array(list));
    }

    pub fn mark_filled(&mut self) {
        self.0.insert(FILLED_KEY.to_string(), Value::Bool(true));
    }

    pub fn bib(&self) -> Option<&Map<String, Value>> {
        self.0.get(BIB_KEY).and_then(Value::as_object)
    }

    pub fn merge_from(&mut self, other: &RawRecord) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_container_type() {
        let author = RawRecord::from_value(json!({"container_type": "Author"})).unwrap();
        let publication = RawRecord::from_value(json!({"container_type": "Publication"})).unwrap();
        let unknown = RawRecord::from_value(json!({"container_type": "Journal"})).unwrap();

        assert_eq!(author.kind(), Some(RecordKind::Author));
        assert_eq!(publication.kind(), Some(RecordKind::Publication));
        assert_eq!(unknown.kind(), None);
        assert_eq!(unknown.container_type(), Some("Journal"));
    }

    #[test]
    fn test_non_object_is_malformed() {
        let err = RawRecord::from_value(json!(["Author"])).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_section_coverage() {
        let mut record = RawRecord::from_value(json!({"filled": ["basics", "counts"]})).unwrap();
        assert!(record.covers_sections(&["basics"]));
        assert!(!record.covers_sections(AUTHOR_SECTIONS));

        record.mark_sections_filled(AUTHOR_SECTIONS);
        assert!(record.covers_sections(AUTHOR_SECTIONS));
    }

    #[test]
    fn test_publication_filled_flag() {
        let mut record = RawRecord::from_value(json!({"filled": false})).unwrap();
        assert!(!record.is_filled());
        record.mark_filled();
        assert!(record.is_filled());
        assert!(!RawRecord::new().is_filled());
    }

    #[test]
    fn test_merge_overwrites() {
        let mut record = RawRecord::new().with("name", json!("old")).with("keep", json!(1));
        let other = RawRecord::new().with("name", json!("new"));
        record.merge_from(&other);

        assert_eq!(record.get_str("name"), Some("new"));
        assert_eq!(record.get("keep"), Some(&json!(1)));
    }
}
