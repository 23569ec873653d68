// Sat Jan 24 2026 - Alex

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scholar-harvest")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Fetch and normalize scholar profiles into a JSON array", long_about = None)]
pub struct Args {
    /// Scholar identifiers to fetch
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,

    /// Maximum number of concurrent fetches
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Snapshot catalog to read profiles from
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Proxy endpoint to rotate through (repeatable)
    #[arg(short = 'p', long = "proxy")]
    pub proxies: Vec<String>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the JSON array here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Layers the command-line flags over `base`.
    pub fn apply(&self, mut base: Config) -> Config {
        if let Some(threads) = self.threads {
            base = base.with_max_threads(threads);
        }
        if let Some(catalog) = &self.catalog {
            base = base.with_catalog_file(catalog.clone());
        }
        if !self.proxies.is_empty() {
            base = base.with_proxies(self.proxies.clone());
        }
        if let Some(output) = &self.output {
            base = base.with_output_file(output.clone());
        }
        if self.no_progress {
            base = base.with_show_progress(false);
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_and_flags() {
        let args = Args::try_parse_from([
            "scholar-harvest",
            "A1",
            "A2",
            "-t",
            "3",
            "--catalog",
            "snap.json",
            "-p",
            "http://p1:80",
            "--proxy",
            "http://p2:80",
        ])
        .unwrap();

        assert_eq!(args.ids, vec!["A1", "A2"]);
        assert_eq!(args.threads, Some(3));
        assert_eq!(args.proxies.len(), 2);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_ids_required() {
        let err = Args::try_parse_from(["scholar-harvest", "--catalog", "snap.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from(["scholar-harvest", "A1", "-t", "2", "-o", "out.json", "--no-progress"])
            .unwrap();
        let base = Config::new()
            .with_max_threads(8)
            .with_catalog_file(PathBuf::from("from-config.json"));

        let config = args.apply(base);
        assert_eq!(config.max_threads, 2);
        assert!(!config.show_progress);
        assert_eq!(config.output_file, Some(PathBuf::from("out.json")));
        assert_eq!(config.catalog_file, Some(PathBuf::from("from-config.json")));
    }
}
