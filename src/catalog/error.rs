// Mon Jan 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("Malformed record: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
