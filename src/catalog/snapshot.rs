// Mon Jan 19 2026 - Alex

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::record::{RawRecord, RecordKind, AUTHOR_SECTIONS};
use crate::catalog::CatalogClient;
use crate::credentials::Credential;
use log::trace;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Offline catalog backed by a previously captured JSON document:
///
/// ```json
/// {
///   "authors":      { "<scholar id>": { "container_type": "Author", ... } },
///   "profiles":     { "<scholar id>": { ...complete author... } },
///   "publications": { "<author_pub_id>": { "container_type": "Publication", ... } }
/// }
/// ```
///
/// `authors` answers lookups. `profiles` and `publications` answer fills; an
/// author without a profile entry is filled from its own `authors` entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotCatalog {
    #[serde(default)]
    authors: HashMap<String, RawRecord>,
    #[serde(default)]
    profiles: HashMap<String, RawRecord>,
    #[serde(default)]
    publications: HashMap<String, RawRecord>,
}

impl SnapshotCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn with_author(mut self, identifier: impl Into<String>, record: RawRecord) -> Self {
        self.authors.insert(identifier.into(), record);
        self
    }

    pub fn with_profile(mut self, identifier: impl Into<String>, record: RawRecord) -> Self {
        self.profiles.insert(identifier.into(), record);
        self
    }

    pub fn with_publication(mut self, author_pub_id: impl Into<String>, record: RawRecord) -> Self {
        self.publications.insert(author_pub_id.into(), record);
        self
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    fn fill_author(&self, record: &mut RawRecord) -> CatalogResult<()> {
        let id = record
            .get_str("scholar_id")
            .ok_or_else(|| CatalogError::Malformed("author record has no scholar_id".to_string()))?
            .to_string();

        let full = self
            .profiles
            .get(&id)
            .or_else(|| self.authors.get(&id))
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

        record.merge_from(full);
        record.mark_sections_filled(AUTHOR_SECTIONS);
        Ok(())
    }

    fn fill_publication(&self, record: &mut RawRecord) -> CatalogResult<()> {
        let id = record
            .get_str("author_pub_id")
            .ok_or_else(|| CatalogError::Malformed("publication record has no author_pub_id".to_string()))?
            .to_string();

        let full = self
            .publications
            .get(&id)
            .ok_or(CatalogError::NotFound(id))?;

        record.merge_from(full);
        record.mark_filled();
        Ok(())
    }
}

impl CatalogClient for SnapshotCatalog {
    fn lookup(&self, identifier: &str, credential: Option<&Credential>) -> CatalogResult<RawRecord> {
        trace!("lookup {} via {}", identifier, describe(credential));
        self.authors
            .get(identifier)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))
    }

    fn fill(&self, record: &mut RawRecord, credential: Option<&Credential>) -> CatalogResult<()> {
        trace!("fill {:?} via {}", record.container_type(), describe(credential));
        match record.kind() {
            Some(RecordKind::Author) => self.fill_author(record),
            Some(RecordKind::Publication) => self.fill_publication(record),
            None => Err(CatalogError::Malformed(format!(
                "cannot fill record of type {:?}",
                record.container_type()
            ))),
        }
    }
}

fn describe(credential: Option<&Credential>) -> String {
    credential
        .map(|c| c.to_string())
        .unwrap_or_else(|| "direct connection".to_string())
}
