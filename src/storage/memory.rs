use std::sync::{Arc, Mutex};

use crate::errors::PersistenceError;

use super::{PersistenceBackend, Result};

/// In-process slot, modelled on browser local storage.
///
/// Clones share the same slot. An optional quota rejects writes whose blob is larger
/// than the limit, the way a full browser store does.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(blob.into()))),
            quota: None,
        }
    }

    pub fn with_quota(mut self, limit: usize) -> Self {
        self.quota = Some(limit);
        self
    }

    /// Current slot contents, bypassing the trait for inspection.
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    /// Poisons the shared lock so every later access fails.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let slot = Arc::clone(&self.slot);
        let _ = std::thread::spawn(move || {
            let _guard = slot.lock();
            panic!("slot holder crashed");
        })
        .join();
    }
}

impl PersistenceBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|err| PersistenceError::Unavailable(err.to_string()))?;
        Ok(slot.clone())
    }

    fn write(&self, blob: &str) -> Result<()> {
        if let Some(limit) = self.quota {
            if blob.len() > limit {
                return Err(PersistenceError::QuotaExceeded {
                    needed: blob.len(),
                    limit,
                });
            }
        }
        let mut slot = self
            .slot
            .lock()
            .map_err(|err| PersistenceError::Unavailable(err.to_string()))?;
        *slot = Some(blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_slot() {
        let backend = MemoryBackend::new();
        let observer = backend.clone();
        backend.write("[1]").unwrap();
        assert_eq!(observer.contents().as_deref(), Some("[1]"));
    }

    #[test]
    fn quota_rejects_oversized_blob_and_keeps_previous() {
        let backend = MemoryBackend::with_blob("[]").with_quota(4);
        let err = backend.write("[1,2,3]").unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::QuotaExceeded {
                needed: 7,
                limit: 4
            }
        ));
        assert_eq!(backend.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn poisoned_slot_is_unavailable() {
        let backend = MemoryBackend::with_blob("[]");
        backend.poison();
        assert!(matches!(backend.read(), Err(PersistenceError::Unavailable(_))));
        assert!(matches!(backend.write("[]"), Err(PersistenceError::Unavailable(_))));
    }
}
