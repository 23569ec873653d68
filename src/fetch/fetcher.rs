// Thu Jan 22 2026 - Alex

use crate::catalog::CatalogClient;
use crate::credentials::{Credential, CredentialManager};
use crate::fetch::{FetchError, FetchOutcome};
use crate::normalize::{NormalizedAuthor, RecordNormalizer};
use log::{debug, warn};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const DEFAULT_FETCH_ATTEMPTS: usize = 10;

/// Rotates the shared credential between attempts, never after the last one.
/// All failure kinds are retried the same way.
#[derive(Clone)]
pub struct RetryingFetcher {
    catalog: Arc<dyn CatalogClient>,
    credentials: Arc<CredentialManager>,
    max_attempts: usize,
    retry_delay: Duration,
}

impl RetryingFetcher {
    pub fn new(catalog: Arc<dyn CatalogClient>, credentials: Arc<CredentialManager>) -> Self {
        Self {
            catalog,
            credentials,
            max_attempts: DEFAULT_FETCH_ATTEMPTS,
            retry_delay: Duration::ZERO,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn credentials(&self) -> &Arc<CredentialManager> {
        &self.credentials
    }

    pub fn fetch_one(&self, identifier: &str) -> FetchOutcome {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let lease = self.credentials.current();

            let error = match self.attempt(identifier, lease.credential()) {
                Ok(author) => {
                    debug!("{}: fetched on attempt {}", identifier, attempt);
                    return FetchOutcome::Fetched { author, attempts: attempt };
                }
                Err(error) => error,
            };

            warn!(
                "{}: attempt {}/{} failed: {}",
                identifier, attempt, self.max_attempts, error
            );
            if attempt >= self.max_attempts {
                return FetchOutcome::Exhausted {
                    attempts: attempt,
                    last_error: error,
                };
            }
            self.credentials.rotate_after(&lease);

            if !self.retry_delay.is_zero() {
                thread::sleep(self.retry_delay);
            }
        }
    }

    fn attempt(&self, identifier: &str, credential: Option<&Credential>) -> Result<NormalizedAuthor, FetchError> {
        let mut raw = self.catalog.lookup(identifier, credential)?;
        let normalizer = RecordNormalizer::new(self.catalog.as_ref(), credential);
        Ok(normalizer.normalize_author(&mut raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{DirectConnection, ProxyPool};
    use crate::fetch::FailureKind;
    use crate::testing::{complete_author, ScriptedCatalog, ALWAYS};
    use serde_json::json;

    fn fetcher(catalog: &Arc<ScriptedCatalog>, credentials: CredentialManager) -> RetryingFetcher {
        RetryingFetcher::new(catalog.clone(), Arc::new(credentials))
    }

    #[test]
    fn test_success_first_attempt() {
        let catalog = Arc::new(ScriptedCatalog::new().with_author("A1", complete_author("A1", "Zoë")));
        let fetcher = fetcher(&catalog, CredentialManager::new(Box::new(DirectConnection)));

        let outcome = fetcher.fetch_one("A1");
        assert!(outcome.is_fetched());
        assert_eq!(outcome.attempts(), 1);
        assert_eq!(catalog.lookups_for("A1"), 1);
        assert_eq!(outcome.into_author().unwrap().scholar_id.as_deref(), Some("A1"));
    }

    #[test]
    fn test_recovers_after_transient_failures() {
        let catalog = Arc::new(
            ScriptedCatalog::new()
                .with_author("A1", complete_author("A1", "Zoë"))
                .failing("A1", 3),
        );
        let fetcher = fetcher(&catalog, CredentialManager::new(Box::new(DirectConnection)));

        let outcome = fetcher.fetch_one("A1");
        assert!(outcome.is_fetched());
        assert_eq!(outcome.attempts(), 4);
        assert_eq!(catalog.lookups_for("A1"), 4);
    }

    #[test]
    fn test_exhaustion_after_exact_bound() {
        let catalog = Arc::new(ScriptedCatalog::new().failing("A2", ALWAYS));
        let fetcher = fetcher(&catalog, CredentialManager::new(Box::new(DirectConnection)));

        let outcome = fetcher.fetch_one("A2");
        assert_eq!(outcome.attempts(), DEFAULT_FETCH_ATTEMPTS);
        assert_eq!(catalog.lookups_for("A2"), DEFAULT_FETCH_ATTEMPTS);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::RetriesExhausted));
        assert!(outcome.into_author().is_none());
    }

    #[test]
    fn test_custom_attempt_bound() {
        let catalog = Arc::new(ScriptedCatalog::new());
        let fetcher = fetcher(&catalog, CredentialManager::new(Box::new(DirectConnection)))
            .with_max_attempts(3);

        let outcome = fetcher.fetch_one("missing");
        assert_eq!(catalog.lookups_for("missing"), 3);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::NotFound));
    }

    #[test]
    fn test_schema_mismatch_consumes_attempts() {
        let record = crate::catalog::RawRecord::from_value(json!({"container_type": "Publication"})).unwrap();
        let catalog = Arc::new(ScriptedCatalog::new().with_author("P1", record));
        let fetcher = fetcher(&catalog, CredentialManager::new(Box::new(DirectConnection)))
            .with_max_attempts(2);

        let outcome = fetcher.fetch_one("P1");
        assert_eq!(outcome.attempts(), 2);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::SchemaInvalid));
    }

    #[test]
    fn test_each_retry_uses_rotated_credential() {
        let catalog = Arc::new(
            ScriptedCatalog::new()
                .with_author("A1", complete_author("A1", "Zoë"))
                .failing("A1", 2),
        );
        let pool = ProxyPool::new(["http://p1:8080", "http://p2:8080"]);
        let fetcher = fetcher(&catalog, CredentialManager::new(Box::new(pool)));

        assert!(fetcher.fetch_one("A1").is_fetched());
        assert_eq!(
            catalog.credentials_seen(),
            vec![
                None,
                Some(Credential::new("http://p1:8080")),
                Some(Credential::new("http://p2:8080")),
            ]
        );
    }

    #[test]
    fn test_no_rotation_after_final_attempt() {
        let catalog = Arc::new(ScriptedCatalog::new().failing("A2", ALWAYS));
        let pool = ProxyPool::new(["http://p1:8080", "http://p2:8080"]);
        let fetcher = fetcher(&catalog, CredentialManager::new(Box::new(pool))).with_max_attempts(3);

        let outcome = fetcher.fetch_one("A2");
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(fetcher.credentials().generation(), 2);
        assert_eq!(catalog.credentials_seen().len(), 3);
    }
}
