// Sat Jan 24 2026 - Alex

use crate::catalog::CatalogClient;
use crate::credentials::manager::DEFAULT_ROTATION_ATTEMPTS;
use crate::credentials::{CredentialManager, CredentialSource, DirectConnection, ProxyPool};
use crate::fetch::{RetryingFetcher, DEFAULT_FETCH_ATTEMPTS};
use crate::orchestrator::DEFAULT_MAX_CONCURRENCY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_threads: usize,
    pub max_fetch_attempts: usize,
    pub max_rotation_attempts: usize,
    pub retry_delay_ms: u64,
    pub output_file: Option<PathBuf>,
    pub catalog_file: Option<PathBuf>,
    pub proxies: Vec<String>,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_threads: DEFAULT_MAX_CONCURRENCY,
            max_fetch_attempts: DEFAULT_FETCH_ATTEMPTS,
            max_rotation_attempts: DEFAULT_ROTATION_ATTEMPTS,
            retry_delay_ms: 0,
            output_file: None,
            catalog_file: None,
            proxies: Vec::new(),
            show_progress: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn with_max_fetch_attempts(mut self, attempts: usize) -> Self {
        self.max_fetch_attempts = attempts;
        self
    }

    pub fn with_catalog_file(mut self, path: PathBuf) -> Self {
        self.catalog_file = Some(path);
        self
    }

    pub fn with_output_file(mut self, path: PathBuf) -> Self {
        self.output_file = Some(path);
        self
    }

    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.proxies = proxies;
        self
    }

    pub fn with_show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_threads == 0 {
            return Err("max_threads must be greater than 0".to_string());
        }
        if self.max_fetch_attempts == 0 {
            return Err("max_fetch_attempts must be greater than 0".to_string());
        }
        if self.max_rotation_attempts == 0 {
            return Err("max_rotation_attempts must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn credential_source(&self) -> Box<dyn CredentialSource> {
        if self.proxies.is_empty() {
            Box::new(DirectConnection)
        } else {
            Box::new(ProxyPool::new(self.proxies.iter().cloned()))
        }
    }

    pub fn build_fetcher(&self, catalog: Arc<dyn CatalogClient>) -> RetryingFetcher {
        let credentials = CredentialManager::new(self.credential_source())
            .with_max_candidates(self.max_rotation_attempts);

        RetryingFetcher::new(catalog, Arc::new(credentials))
            .with_max_attempts(self.max_fetch_attempts)
            .with_retry_delay(self.retry_delay())
    }
}
