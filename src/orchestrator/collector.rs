// Fri Jan 23 2026 - Alex

use crate::fetch::{FailureKind, FetchOutcome};
use crate::normalize::NormalizedAuthor;
use parking_lot::Mutex;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchReport {
    pub submitted: usize,
    pub fetched: usize,
    pub not_found: usize,
    pub schema_invalid: usize,
    pub retries_exhausted: usize,
    pub attempts: usize,
}

impl FetchReport {
    pub fn new(submitted: usize) -> Self {
        Self {
            submitted,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &FetchOutcome) {
        self.attempts += outcome.attempts();
        match outcome.failure_kind() {
            None => self.fetched += 1,
            Some(FailureKind::NotFound) => self.not_found += 1,
            Some(FailureKind::SchemaInvalid) => self.schema_invalid += 1,
            Some(FailureKind::RetriesExhausted) => self.retries_exhausted += 1,
        }
    }

    pub fn failed(&self) -> usize {
        self.not_found + self.schema_invalid + self.retries_exhausted
    }

    pub fn completed(&self) -> usize {
        self.fetched + self.failed()
    }
}

pub struct BatchCollector {
    authors: Mutex<Vec<NormalizedAuthor>>,
    report: Mutex<FetchReport>,
}

impl BatchCollector {
    pub fn new(submitted: usize) -> Self {
        Self {
            authors: Mutex::new(Vec::with_capacity(submitted)),
            report: Mutex::new(FetchReport::new(submitted)),
        }
    }

    pub fn collect(&self, outcome: FetchOutcome) {
        self.report.lock().record(&outcome);
        if let Some(author) = outcome.into_author() {
            self.authors.lock().push(author);
        }
    }

    pub fn finish(self) -> ResultBatch {
        ResultBatch {
            authors: self.authors.into_inner(),
            report: self.report.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBatch {
    authors: Vec<NormalizedAuthor>,
    report: FetchReport,
}

impl ResultBatch {
    pub fn into_authors(self) -> Vec<NormalizedAuthor> {
        self.authors
    }

    pub fn report(&self) -> &FetchReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedAuthor> {
        self.authors.iter()
    }
}

impl Serialize for ResultBatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.authors.serialize(serializer)
    }
}
