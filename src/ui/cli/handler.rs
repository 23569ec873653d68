// Sat Jan 24 2026 - Alex

use super::args::Args;
use crate::catalog::SnapshotCatalog;
use crate::config::Config;
use crate::credentials::RotationOutcome;
use crate::orchestrator::{FetchOrchestrator, FetchReport};
use crate::output::JsonSerializer;
use crate::ui::{print_info, print_success, print_warning, ProgressManager};
use anyhow::Context;
use std::sync::Arc;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args);

        let config = self.resolve_config(&args)?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;

        let catalog_path = config
            .catalog_file
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no catalog given; pass --catalog or set catalog_file in the config"))?;
        let catalog = SnapshotCatalog::load(&catalog_path)
            .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;
        print_info(&format!(
            "Loaded {} authors from {}",
            catalog.author_count(),
            catalog_path.display()
        ));

        let fetcher = config.build_fetcher(Arc::new(catalog));
        if !config.proxies.is_empty() {
            if let RotationOutcome::Exhausted = fetcher.credentials().rotate() {
                print_warning("None of the configured proxies is usable; connecting directly");
            }
        }

        let bar = ProgressManager::new()
            .with_enabled(config.show_progress)
            .fetch_bar(args.ids.len() as u64);
        let orchestrator = FetchOrchestrator::new(fetcher).with_progress(bar.clone());
        let batch = orchestrator.run(&args.ids, config.max_threads);
        bar.finish_and_clear();

        self.print_report(batch.report());

        let serializer = JsonSerializer::new();
        match &config.output_file {
            Some(path) => {
                serializer
                    .serialize_to_file(&batch, path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                print_success(&format!("Results saved to: {}", path.display()));
            }
            None => println!("{}", serializer.serialize(&batch)?),
        }

        Ok(())
    }

    fn setup_logging(&self, args: &Args) {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        // try_init: a second handler in the same process keeps the first logger
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .target(env_logger::Target::Stderr)
            .try_init();
    }

    fn resolve_config(&self, args: &Args) -> anyhow::Result<Config> {
        let base = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => Config::default(),
        };
        Ok(args.apply(base))
    }

    fn print_report(&self, report: &FetchReport) {
        print_info(&format!(
            "Fetched {}/{} profiles in {} attempts",
            report.fetched, report.submitted, report.attempts
        ));
        if report.failed() > 0 {
            print_warning(&format!(
                "Dropped {} (not found: {}, malformed: {}, retries exhausted: {})",
                report.failed(),
                report.not_found,
                report.schema_invalid,
                report.retries_exhausted
            ));
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
