// Tue Jan 20 2026 - Alex

use crate::credentials::{Credential, CredentialSource};
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};

pub const DEFAULT_ROTATION_ATTEMPTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialLease {
    credential: Option<Credential>,
    generation: u64,
}

impl CredentialLease {
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    Rotated(Credential),
    Superseded(Option<Credential>),
    /// No candidate could be obtained and activated; the manager is now unset.
    Exhausted,
}

impl RotationOutcome {
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            RotationOutcome::Rotated(credential) => Some(credential),
            RotationOutcome::Superseded(credential) => credential.as_ref(),
            RotationOutcome::Exhausted => None,
        }
    }
}

struct ActiveSlot {
    credential: Option<Credential>,
    generation: u64,
}

pub struct CredentialManager {
    source: Box<dyn CredentialSource>,
    active: RwLock<ActiveSlot>,
    rotation: Mutex<()>,
    max_candidates: usize,
}

impl CredentialManager {
    pub fn new(source: Box<dyn CredentialSource>) -> Self {
        Self {
            source,
            active: RwLock::new(ActiveSlot {
                credential: None,
                generation: 0,
            }),
            rotation: Mutex::new(()),
            max_candidates: DEFAULT_ROTATION_ATTEMPTS,
        }
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    pub fn current(&self) -> CredentialLease {
        let slot = self.active.read();
        CredentialLease {
            credential: slot.credential.clone(),
            generation: slot.generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.active.read().generation
    }

    pub fn rotate(&self) -> RotationOutcome {
        let _guard = self.rotation.lock();
        self.rotate_locked()
    }

    /// Replaces the active credential unless someone already did so since
    /// `observed` was leased.
    pub fn rotate_after(&self, observed: &CredentialLease) -> RotationOutcome {
        let _guard = self.rotation.lock();
        {
            let slot = self.active.read();
            if slot.generation != observed.generation {
                debug!(
                    "skipping rotation: generation {} already replaced by {}",
                    observed.generation, slot.generation
                );
                return RotationOutcome::Superseded(slot.credential.clone());
            }
        }
        self.rotate_locked()
    }

    fn rotate_locked(&self) -> RotationOutcome {
        for attempt in 1..=self.max_candidates {
            let candidate = match self.source.acquire() {
                Ok(candidate) => candidate,
                Err(e) => {
                    debug!("credential candidate {}/{} unavailable: {}", attempt, self.max_candidates, e);
                    continue;
                }
            };

            if self.source.activate(&candidate) {
                info!("switched to {}", candidate);
                self.install(Some(candidate.clone()));
                return RotationOutcome::Rotated(candidate);
            }
            debug!("credential candidate {}/{} failed activation", attempt, self.max_candidates);
        }

        warn!(
            "no usable credential after {} candidates, continuing without one",
            self.max_candidates
        );
        self.install(None);
        RotationOutcome::Exhausted
    }

    fn install(&self, credential: Option<Credential>) {
        let mut slot = self.active.write();
        slot.credential = credential;
        slot.generation += 1;
    }
}
