// Wed Jan 21 2026 - Alex

pub mod author;
pub mod coauthor;
pub mod fields;
pub mod normalizer;
pub mod publication;

pub use author::NormalizedAuthor;
pub use coauthor::NormalizedCoauthor;
pub use normalizer::RecordNormalizer;
pub use publication::NormalizedPublication;

use crate::catalog::{CatalogError, RawRecord, RecordKind};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Schema mismatch: expected {expected}, found {}", .found.as_deref().unwrap_or("untyped record"))]
    SchemaMismatch {
        expected: RecordKind,
        found: Option<String>,
    },
    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("Fill failed: {0}")]
    Fill(#[from] CatalogError),
}

pub trait Schema: Default {
    const KIND: RecordKind;
    const FIELDS: &'static [&'static str];

    fn assign(&mut self, field: &str, value: &Value) -> Result<bool, NormalizeError>;

    fn copy_fields<F>(&mut self, source: &Map<String, Value>, skip: F) -> Result<(), NormalizeError>
    where
        F: Fn(&str) -> bool,
    {
        for &field in Self::FIELDS {
            if skip(field) {
                continue;
            }
            if let Some(value) = source.get(field) {
                self.assign(field, value)?;
            }
        }
        Ok(())
    }
}

pub fn expect_kind(raw: &RawRecord, expected: RecordKind) -> Result<(), NormalizeError> {
    if raw.kind() == Some(expected) {
        Ok(())
    } else {
        Err(NormalizeError::SchemaMismatch {
            expected,
            found: raw.container_type().map(str::to_string),
        })
    }
}
