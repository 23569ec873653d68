// Wed Jan 21 2026 - Alex

use crate::catalog::RecordKind;
use crate::normalize::fields::{self, YearlyCounts};
use crate::normalize::{NormalizeError, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPublication {
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_pub_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bib_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cites_per_year: Option<YearlyCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_citations: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_related_articles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

impl NormalizedPublication {
    pub const ENTRY_FIELDS: &'static [&'static str] = &[
        "author_id",
        "num_citations",
        "cites_per_year",
        "pub_url",
        "author_pub_id",
        "url_related_articles",
    ];

    pub const BIB_FIELDS: &'static [&'static str] = &[
        "pub_type",
        "bib_id",
        "abstract",
        "title",
        "author",
        "pub_year",
        "venue",
        "journal",
        "volume",
        "number",
        "pages",
        "publisher",
        "citation",
    ];

    /// Builds a publication from its top-level map and its `bib` sub-map.
    ///
    /// A declared name present in `bib` is taken from `bib` only; the top-level
    /// value for that name is never read.
    pub fn merge(entry: &Map<String, Value>, bib: Option<&Map<String, Value>>) -> Result<Self, NormalizeError> {
        let mut publication = Self::default();

        publication.copy_fields(entry, |field| bib.is_some_and(|b| b.contains_key(field)))?;
        if let Some(bib) = bib {
            publication.copy_fields(bib, |_| false)?;
        }

        Ok(publication)
    }
}

impl Schema for NormalizedPublication {
    const KIND: RecordKind = RecordKind::Publication;
    const FIELDS: &'static [&'static str] = &[
        "author_id",
        "num_citations",
        "cites_per_year",
        "pub_url",
        "author_pub_id",
        "url_related_articles",
        "pub_type",
        "bib_id",
        "abstract",
        "title",
        "author",
        "pub_year",
        "venue",
        "journal",
        "volume",
        "number",
        "pages",
        "publisher",
        "citation",
    ];

    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, NormalizeError> {
        match field {
            "author_id" => self.author_id = fields::text_list(field, value)?,
            "num_citations" => self.num_citations = fields::count(field, value)?,
            "cites_per_year" => self.cites_per_year = fields::yearly_counts(field, value)?,
            "pub_url" => self.pub_url = fields::text(field, value)?,
            "author_pub_id" => self.author_pub_id = fields::text(field, value)?,
            "url_related_articles" => self.url_related_articles = fields::text(field, value)?,
            "pub_type" => self.pub_type = fields::text(field, value)?,
            "bib_id" => self.bib_id = fields::text(field, value)?,
            "abstract" => self.abstract_text = fields::text(field, value)?,
            "title" => self.title = fields::text(field, value)?,
            "author" => self.author = fields::text(field, value)?,
            "pub_year" => self.pub_year = fields::text(field, value)?,
            "venue" => self.venue = fields::text(field, value)?,
            "journal" => self.journal = fields::text(field, value)?,
            "volume" => self.volume = fields::text(field, value)?,
            "number" => self.number = fields::text(field, value)?,
            "pages" => self.pages = fields::text(field, value)?,
            "publisher" => self.publisher = fields::text(field, value)?,
            "citation" => self.citation = fields::text(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}
