//! In-process implementation of [`KeyValueStore`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tessera_core::error::{TesseraError, TesseraResult};
use tessera_core::store::KeyValueStore;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Process-local store with the same per-key semantics as the Redis
/// backend, including TTL expiry.
///
/// Clones share the same map. Only one process can see it, so it suits
/// tests and single-instance deployments.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) keys.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.values().filter(|e| !e.is_expired(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> TesseraError {
    TesseraError::Internal("memory store lock poisoned".into())
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> TesseraResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: String, ttl_secs: Option<u64>) -> TesseraResult<()> {
        let expires_at = ttl_secs.and_then(|ttl| Instant::now().checked_add(Duration::from_secs(ttl)));
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }

    async fn replace(&self, key: &str, value: String) -> TesseraResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired(now) => {
                entry.value = value;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, key: &str) -> TesseraResult<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poison(store: &MemoryStore) {
        let entries = Arc::clone(&store.entries);
        let _ = std::thread::spawn(move || {
            let _guard = entries.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(store.entries.is_poisoned());
    }

    #[tokio::test]
    async fn poisoned_lock_is_reported_by_operations() {
        let store = MemoryStore::new();
        store.set("s1", "record".into(), None).await.unwrap();
        poison(&store);

        assert!(matches!(store.get("s1").await, Err(TesseraError::Internal(_))));
        assert!(matches!(
            store.replace("s1", "ended".into()).await,
            Err(TesseraError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn len_still_counts_after_poisoning() {
        let store = MemoryStore::new();
        store.set("s1", "record".into(), None).await.unwrap();
        poison(&store);

        assert_eq!(store.len(), 1);
    }
}
