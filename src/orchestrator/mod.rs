// Fri Jan 23 2026 - Alex

pub mod collector;
pub mod scheduler;

pub use collector::{BatchCollector, FetchReport, ResultBatch};
pub use scheduler::{FetchOrchestrator, DEFAULT_MAX_CONCURRENCY};

use crate::fetch::RetryingFetcher;
use crate::output::{JsonSerializer, OutputError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("No identifiers given")]
    NoIdentifiers,
    #[error(transparent)]
    Output(#[from] OutputError),
}

pub fn harvest(
    fetcher: RetryingFetcher,
    identifiers: &[String],
    max_concurrency: Option<usize>,
) -> Result<String, HarvestError> {
    if identifiers.is_empty() {
        return Err(HarvestError::NoIdentifiers);
    }

    let batch = FetchOrchestrator::new(fetcher)
        .run(identifiers, max_concurrency.unwrap_or(DEFAULT_MAX_CONCURRENCY));

    Ok(JsonSerializer::new().serialize(&batch)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialManager, DirectConnection};
    use crate::testing::{complete_author, ScriptedCatalog, ALWAYS};
    use serde_json::Value;
    use std::sync::Arc;

    fn fetcher(catalog: Arc<ScriptedCatalog>) -> RetryingFetcher {
        RetryingFetcher::new(catalog, Arc::new(CredentialManager::new(Box::new(DirectConnection))))
    }

    #[test]
    fn test_end_to_end_one_success_one_failure() {
        let catalog = Arc::new(
            ScriptedCatalog::new()
                .with_author("A1", complete_author("A1", "Zoë Ångström"))
                .with_author("A2", complete_author("A2", "Never Returned"))
                .failing("A2", ALWAYS),
        );

        let text = harvest(fetcher(catalog.clone()), &["A1".to_string(), "A2".to_string()], None).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        let authors = parsed.as_array().unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0]["scholar_id"], "A1");
        assert_eq!(catalog.lookups_for("A1"), 1);

        assert!(text.contains("Zoë Ångström"));
        assert!(text.contains("Université de Lyon"));
        assert!(text.starts_with("[\n    {\n        \"affiliation\""));

        let keys: Vec<&String> = authors[0].as_object().unwrap().keys().collect();
        let mut expected = keys.clone();
        expected.sort();
        assert_eq!(keys, expected);
        let position = |needle: &str| text.find(needle).unwrap();
        assert!(position("\"affiliation\"") < position("\"citedby\""));
        assert!(position("\"organization\"") < position("\"publications\""));
    }

    #[test]
    fn test_internal_fields_not_emitted() {
        let catalog = Arc::new(ScriptedCatalog::new().with_author("A1", complete_author("A1", "Zoë")));
        let text = harvest(fetcher(catalog), &["A1".to_string()], Some(1)).unwrap();

        for leaked in ["container_type", "filled", "email_domain", "citedby5y", "eprint", "source", "bib"] {
            assert!(!text.contains(&format!("\"{}\"", leaked)), "{leaked} leaked into output");
        }
    }

    #[test]
    fn test_no_identifiers_is_usage_error() {
        let catalog = Arc::new(ScriptedCatalog::new());
        let err = harvest(fetcher(catalog.clone()), &[], None).unwrap_err();

        assert!(matches!(err, HarvestError::NoIdentifiers));
        assert_eq!(catalog.total_lookups(), 0);
    }
}
