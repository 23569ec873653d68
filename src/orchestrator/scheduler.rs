// Fri Jan 23 2026 - Alex

use crate::fetch::RetryingFetcher;
use crate::orchestrator::collector::{BatchCollector, ResultBatch};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;

pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

pub fn worker_count(max_concurrency: usize, identifiers: usize) -> usize {
    if identifiers == 0 {
        0
    } else {
        max_concurrency.clamp(1, identifiers)
    }
}

pub struct FetchOrchestrator {
    fetcher: RetryingFetcher,
    progress: Option<ProgressBar>,
}

impl FetchOrchestrator {
    pub fn new(fetcher: RetryingFetcher) -> Self {
        Self {
            fetcher,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Returns once every identifier has either been fetched or given up on.
    /// Element order follows completion order, not input order.
    pub fn run(&self, identifiers: &[String], max_concurrency: usize) -> ResultBatch {
        let collector = BatchCollector::new(identifiers.len());
        let workers = worker_count(max_concurrency, identifiers.len());

        info!("fetching {} identifiers with {} workers", identifiers.len(), workers);

        match workers {
            0 => {}
            1 => self.run_sequential(identifiers, &collector),
            _ => self.run_pooled(identifiers, workers, &collector),
        }

        let batch = collector.finish();
        let report = batch.report();
        info!(
            "fetched {}/{} ({} not found, {} malformed, {} exhausted, {} attempts)",
            report.fetched,
            report.submitted,
            report.not_found,
            report.schema_invalid,
            report.retries_exhausted,
            report.attempts
        );
        batch
    }

    fn run_sequential(&self, identifiers: &[String], collector: &BatchCollector) {
        for (index, identifier) in identifiers.iter().enumerate() {
            self.process(index, identifier, collector);
        }
    }

    fn run_pooled(&self, identifiers: &[String], workers: usize, collector: &BatchCollector) {
        let pool = match ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("fetch-worker-{}", i))
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!("could not start {} workers ({}), fetching sequentially", workers, e);
                return self.run_sequential(identifiers, collector);
            }
        };

        pool.scope(|scope| {
            for (index, identifier) in identifiers.iter().enumerate() {
                scope.spawn(move |_| self.process(index, identifier, collector));
            }
        });
    }

    fn process(&self, index: usize, identifier: &str, collector: &BatchCollector) {
        let outcome = self.fetcher.fetch_one(identifier);
        if let Some(kind) = outcome.failure_kind() {
            debug!("#{} {}: dropped after {} attempts ({})", index, identifier, outcome.attempts(), kind);
        }
        collector.collect(outcome);

        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
    }
}
