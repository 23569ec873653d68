// Wed Jan 21 2026 - Alex

use crate::catalog::RecordKind;
use crate::normalize::fields::{self, YearlyCounts};
use crate::normalize::{NormalizeError, NormalizedCoauthor, NormalizedPublication, Schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citedby: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coauthors: Option<Vec<NormalizedCoauthor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cites_per_year: Option<YearlyCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<NormalizedPublication>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scholar_id: Option<String>,
}

impl NormalizedAuthor {
    pub fn publication_count(&self) -> usize {
        self.publications.as_ref().map_or(0, Vec::len)
    }

    pub fn coauthor_count(&self) -> usize {
        self.coauthors.as_ref().map_or(0, Vec::len)
    }
}

impl Schema for NormalizedAuthor {
    const KIND: RecordKind = RecordKind::Author;
    // `publications` and `coauthors` are nested records, filled in separately.
    const FIELDS: &'static [&'static str] = &[
        "scholar_id",
        "name",
        "affiliation",
        "organization",
        "homepage",
        "citedby",
        "interests",
        "cites_per_year",
    ];

    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, NormalizeError> {
        match field {
            "scholar_id" => self.scholar_id = fields::text(field, value)?,
            "name" => self.name = fields::text(field, value)?,
            "affiliation" => self.affiliation = fields::text(field, value)?,
            "organization" => self.organization = fields::count(field, value)?,
            "homepage" => self.homepage = fields::text(field, value)?,
            "citedby" => self.citedby = fields::count(field, value)?,
            "interests" => self.interests = fields::text_list(field, value)?,
            "cites_per_year" => self.cites_per_year = fields::yearly_counts(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
