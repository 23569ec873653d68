// Thu Jan 22 2026 - Alex

use crate::catalog::{CatalogClient, CatalogError, CatalogResult, RawRecord, RecordKind, AUTHOR_SECTIONS};
use crate::credentials::Credential;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ALWAYS: usize = usize::MAX;

#[derive(Default)]
pub struct ScriptedCatalog {
    records: HashMap<String, RawRecord>,
    failures: Mutex<HashMap<String, usize>>,
    lookups: Mutex<HashMap<String, usize>>,
    fills: AtomicUsize,
    credentials_seen: Mutex<Vec<Option<Credential>>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, identifier: &str, record: RawRecord) -> Self {
        self.records.insert(identifier.to_string(), record);
        self
    }

    /// The next `times` lookups of `identifier` fail as rate limited.
    pub fn failing(self, identifier: &str, times: usize) -> Self {
        self.failures.lock().insert(identifier.to_string(), times);
        self
    }

    pub fn lookups_for(&self, identifier: &str) -> usize {
        self.lookups.lock().get(identifier).copied().unwrap_or(0)
    }

    pub fn total_lookups(&self) -> usize {
        self.lookups.lock().values().sum()
    }

    pub fn fill_count(&self) -> usize {
        self.fills.load(Ordering::SeqCst)
    }

    pub fn credentials_seen(&self) -> Vec<Option<Credential>> {
        self.credentials_seen.lock().clone()
    }
}

impl CatalogClient for ScriptedCatalog {
    fn lookup(&self, identifier: &str, credential: Option<&Credential>) -> CatalogResult<RawRecord> {
        *self.lookups.lock().entry(identifier.to_string()).or_insert(0) += 1;
        self.credentials_seen.lock().push(credential.cloned());

        if let Some(remaining) = self.failures.lock().get_mut(identifier) {
            if *remaining > 0 {
                if *remaining != ALWAYS {
                    *remaining -= 1;
                }
                return Err(CatalogError::RateLimited(identifier.to_string()));
            }
        }

        self.records
            .get(identifier)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))
    }

    fn fill(&self, record: &mut RawRecord, _credential: Option<&Credential>) -> CatalogResult<()> {
        self.fills.fetch_add(1, Ordering::SeqCst);
        match record.kind() {
            Some(RecordKind::Author) => record.mark_sections_filled(AUTHOR_SECTIONS),
            Some(RecordKind::Publication) => {
                record.insert("url_related_articles", json!("/scholar?q=related:filled"));
                record.mark_filled();
            }
            None => return Err(CatalogError::Malformed("untyped".to_string())),
        }
        Ok(())
    }
}

pub fn complete_author(identifier: &str, name: &str) -> RawRecord {
    RawRecord::from_value(json!({
        "container_type": "Author",
        "filled": AUTHOR_SECTIONS,
        "source": "AUTHOR_PROFILE_PAGE",
        "scholar_id": identifier,
        "name": name,
        "affiliation": "Université de Lyon",
        "organization": 4421,
        "homepage": "https://example.org/~someone",
        "email_domain": "@example.org",
        "citedby": 42,
        "citedby5y": 30,
        "interests": ["Distributed systems", "Théorie des graphes"],
        "cites_per_year": {"2022": 10, "2023": 32},
        "publications": [
            {
                "container_type": "Publication",
                "filled": true,
                "source": "AUTHOR_PUBLICATION_ENTRY",
                "author_pub_id": format!("{}:p1", identifier),
                "num_citations": 7,
                "title": "Entry-level title",
                "bib": {
                    "title": "Bibliographic title",
                    "pub_year": "2021",
                    "citation": "Journal of Examples 3 (2), 1-10",
                    "eprint": "should not leak"
                }
            }
        ],
        "coauthors": [
            {
                "container_type": "Author",
                "filled": [],
                "scholar_id": "C1",
                "name": "Ana Núñez",
                "affiliation": "Universidad de Chile",
                "interests": ["not copied for coauthors"]
            }
        ]
    }))
    .expect("fixture is an object")
}

pub fn partial_author(identifier: &str, name: &str) -> RawRecord {
    RawRecord::from_value(json!({
        "container_type": "Author",
        "filled": ["basics"],
        "scholar_id": identifier,
        "name": name,
        "publications": [
            {
                "container_type": "Publication",
                "filled": false,
                "author_pub_id": format!("{}:p1", identifier),
                "bib": {"title": "Needs filling"}
            }
        ]
    }))
    .expect("fixture is an object")
}
