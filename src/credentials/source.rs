// Tue Jan 20 2026 - Alex

use crate::credentials::{Credential, CredentialError, CredentialSource};
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct ProxyPool {
    candidates: Vec<Credential>,
    cursor: AtomicUsize,
}

impl ProxyPool {
    pub fn new<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = endpoints
            .into_iter()
            .map(Credential::new)
            .filter(|c| !c.endpoint().is_empty())
            .collect();

        Self {
            candidates,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl CredentialSource for ProxyPool {
    fn acquire(&self) -> Result<Credential, CredentialError> {
        if self.candidates.is_empty() {
            return Err(CredentialError::Exhausted);
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.candidates.len();
        Ok(self.candidates[index].clone())
    }

    fn activate(&self, credential: &Credential) -> bool {
        let ok = credential.is_well_formed();
        if !ok {
            debug!("rejecting malformed {}", credential);
        }
        ok
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DirectConnection;

impl CredentialSource for DirectConnection {
    fn acquire(&self) -> Result<Credential, CredentialError> {
        Err(CredentialError::Exhausted)
    }

    fn activate(&self, _credential: &Credential) -> bool {
        false
    }
}
