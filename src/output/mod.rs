// Fri Jan 23 2026 - Alex

pub mod json;

pub use json::{to_json_file, to_json_string, JsonSerializer};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
