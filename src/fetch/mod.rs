// Thu Jan 22 2026 - Alex

pub mod fetcher;

pub use fetcher::{RetryingFetcher, DEFAULT_FETCH_ATTEMPTS};

use crate::catalog::CatalogError;
use crate::normalize::{NormalizeError, NormalizedAuthor};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Upstream failure: {0}")]
    Upstream(#[from] CatalogError),
    #[error("Normalization failed: {0}")]
    Normalize(#[from] NormalizeError),
}

impl FetchError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            FetchError::Upstream(e) if e.is_not_found() => FailureKind::NotFound,
            FetchError::Normalize(NormalizeError::Fill(e)) if e.is_not_found() => FailureKind::NotFound,
            FetchError::Normalize(NormalizeError::SchemaMismatch { .. })
            | FetchError::Normalize(NormalizeError::InvalidField { .. }) => FailureKind::SchemaInvalid,
            _ => FailureKind::RetriesExhausted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    NotFound,
    SchemaInvalid,
    RetriesExhausted,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::NotFound => "not found",
            FailureKind::SchemaInvalid => "malformed upstream data",
            FailureKind::RetriesExhausted => "retries exhausted",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub enum FetchOutcome {
    Fetched {
        author: NormalizedAuthor,
        attempts: usize,
    },
    Exhausted {
        attempts: usize,
        last_error: FetchError,
    },
}

impl FetchOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched { .. })
    }

    pub fn attempts(&self) -> usize {
        match self {
            FetchOutcome::Fetched { attempts, .. } | FetchOutcome::Exhausted { attempts, .. } => *attempts,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            FetchOutcome::Fetched { .. } => None,
            FetchOutcome::Exhausted { last_error, .. } => Some(last_error.failure_kind()),
        }
    }

    pub fn into_author(self) -> Option<NormalizedAuthor> {
        match self {
            FetchOutcome::Fetched { author, .. } => Some(author),
            FetchOutcome::Exhausted { .. } => None,
        }
    }
}
