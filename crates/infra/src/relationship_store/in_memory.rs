use std::sync::Mutex;

use bomkit_inventory::RelationshipMap;

use crate::error::InfraError;

use super::RelationshipStore;

/// In-memory relationship store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryRelationshipStore {
    inner: Mutex<Stored>,
}

#[derive(Debug, Default)]
struct Stored {
    map: RelationshipMap,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryRelationshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(map: RelationshipMap) -> Self {
        Self {
            inner: Mutex::new(Stored {
                map,
                ..Stored::default()
            }),
        }
    }

    /// Snapshot of what is currently "on disk".
    pub fn snapshot(&self) -> RelationshipMap {
        self.inner.lock().map(|s| s.map.clone()).unwrap_or_default()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.inner.lock().map(|s| s.saves).unwrap_or(0)
    }

    /// Make subsequent saves fail, simulating a full disk.
    pub fn fail_saves(&self, fail: bool) {
        if let Ok(mut s) = self.inner.lock() {
            s.fail_saves = fail;
        }
    }
}

impl RelationshipStore for InMemoryRelationshipStore {
    fn load(&self) -> Result<RelationshipMap, InfraError> {
        Ok(self.snapshot())
    }

    fn save(&self, map: &RelationshipMap) -> Result<(), InfraError> {
        let mut stored = self
            .inner
            .lock()
            .map_err(|_| InfraError::io("<memory>", std::io::Error::other("store lock poisoned")))?;
        if stored.fail_saves {
            return Err(InfraError::io(
                "<memory>",
                std::io::Error::other("simulated save failure"),
            ));
        }
        stored.map = map.clone();
        stored.saves += 1;
        Ok(())
    }
}
