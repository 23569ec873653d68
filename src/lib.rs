// Sat Jan 24 2026 - Alex

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod fetch;
pub mod normalize;
pub mod orchestrator;
pub mod output;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{CatalogClient, RawRecord, SnapshotCatalog};
pub use config::Config;
pub use credentials::{Credential, CredentialManager, CredentialSource};
pub use fetch::{FetchOutcome, RetryingFetcher};
pub use normalize::{NormalizedAuthor, NormalizedCoauthor, NormalizedPublication, RecordNormalizer};
pub use orchestrator::{harvest, FetchOrchestrator, ResultBatch};
pub use output::JsonSerializer;
