// Wed Jan 21 2026 - Alex

use crate::catalog::RecordKind;
use crate::normalize::{fields, NormalizeError, Schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCoauthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scholar_id: Option<String>,
}

impl Schema for NormalizedCoauthor {
    const KIND: RecordKind = RecordKind::Author;
    const FIELDS: &'static [&'static str] = &["scholar_id", "name", "affiliation"];

    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, NormalizeError> {
        match field {
            "scholar_id" => self.scholar_id = fields::text(field, value)?,
            "name" => self.name = fields::text(field, value)?,
            "affiliation" => self.affiliation = fields::text(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
