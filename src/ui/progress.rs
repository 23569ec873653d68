// Sat Jan 24 2026 - Alex

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

pub struct ProgressManager {
    enabled: bool,
    style_template: String,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            enabled: true,
            style_template: "{spinner:.cyan} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}".to_string(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_style(mut self, template: &str) -> Self {
        self.style_template = template.to_string();
        self
    }

    pub fn fetch_bar(&self, total: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
        }

        let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        let style = ProgressStyle::default_bar()
            .template(&self.style_template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ ");
        pb.set_style(style);
        pb.set_message("fetching profiles");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
