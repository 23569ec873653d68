// Sat Jan 24 2026 - Alex

pub mod cli;
pub mod progress;

pub use cli::{Args, CommandHandler};
pub use progress::ProgressManager;

use colored::Colorize;

// Status lines go to stderr; stdout is reserved for the JSON document.

pub fn print_info(message: &str) {
    eprintln!("{} {}", "[*]".blue(), message);
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "[+]".green(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[!]".yellow(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[!]".red(), message);
}
