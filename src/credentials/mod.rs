// Tue Jan 20 2026 - Alex

pub mod manager;
pub mod source;

pub use manager::{CredentialLease, CredentialManager, RotationOutcome};
pub use source::{DirectConnection, ProxyPool};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

static PROXY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(https?|socks5h?)://(?:[^:@/\s]+(?::[^@/\s]*)?@)?([^:@/\s]+):(\d{1,5})/?$")
        .expect("proxy pattern is valid")
});

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("No credential candidates available")]
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential {
    endpoint: String,
}

impl Credential {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim().to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn scheme(&self) -> Option<String> {
        PROXY_PATTERN
            .captures(&self.endpoint)
            .map(|caps| caps[1].to_lowercase())
    }

    pub fn host(&self) -> Option<&str> {
        PROXY_PATTERN
            .captures(&self.endpoint)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
    }

    pub fn port(&self) -> Option<u16> {
        PROXY_PATTERN
            .captures(&self.endpoint)
            .and_then(|caps| caps[3].parse::<u16>().ok())
            .filter(|port| *port != 0)
    }

    pub fn is_well_formed(&self) -> bool {
        self.port().is_some()
    }

    pub fn redacted(&self) -> String {
        match (self.endpoint.find("://"), self.endpoint.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://***@{}", &self.endpoint[..scheme_end], &self.endpoint[at + 1..])
            }
            _ => self.endpoint.clone(),
        }
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proxy {}", self.redacted())
    }
}

pub trait CredentialSource: Send + Sync {
    fn acquire(&self) -> Result<Credential, CredentialError>;

    fn activate(&self, credential: &Credential) -> bool;
}
