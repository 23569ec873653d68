// Mon Jan 19 2026 - Alex

pub mod error;
pub mod record;
pub mod snapshot;

pub use error::{CatalogError, CatalogResult};
pub use record::{RawRecord, RecordKind, AUTHOR_SECTIONS};
pub use snapshot::SnapshotCatalog;

use crate::credentials::Credential;

pub trait CatalogClient: Send + Sync {
    fn lookup(&self, identifier: &str, credential: Option<&Credential>) -> CatalogResult<RawRecord>;

    fn fill(&self, record: &mut RawRecord, credential: Option<&Credential>) -> CatalogResult<()>;
}

