use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-memory key-value map that remembers insertion order.
///
/// All mutations run under a single write-lock acquisition, so a
/// read-check-write sequence inside one call is atomic with respect to every
/// other caller. Overwriting an existing key keeps its original position.
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<Entries<K, V>>>,
}

struct Entries<K, V> {
    map: HashMap<K, Slot<V>>,
    next_seq: u64,
}

struct Slot<V> {
    seq: u64,
    value: V,
}

impl<K, V> Clone for MemoryMapStore<K, V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Entries<K, V>
where
    K: Eq + Hash,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.map.get_mut(&key) {
            return Some(std::mem::replace(&mut slot.value, value));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.map.insert(key, Slot { seq, value });
        None
    }
}

impl<K, V> MemoryMapStore<K, V> {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Entries { map: HashMap::new(), next_seq: 0 })) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// List all entries as `(key, value)` pairs in insertion order.
    pub async fn list(&self) -> Vec<(K, V)> {
        let entries = self.inner.read().await;
        let mut slots: Vec<(&K, &Slot<V>)> = entries.map.iter().collect();
        slots.sort_unstable_by_key(|(_, slot)| slot.seq);
        slots.into_iter().map(|(k, slot)| (k.clone(), slot.value.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.inner.read().await;
        entries.map.get(key).map(|slot| slot.value.clone())
    }

    /// Insert or overwrite; returns the previous value, if any.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut entries = self.inner.write().await;
        entries.put(key, value)
    }

    /// Remove a key; returns the removed value, if any.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut entries = self.inner.write().await;
        entries.map.remove(key).map(|slot| slot.value)
    }

    /// Mutate the value under `key` in place. Returns `None` when the key is absent.
    pub async fn update<F, T>(&self, key: &K, f: F) -> Option<T>
    where
        F: FnOnce(&mut V) -> T,
    {
        let mut entries = self.inner.write().await;
        entries.map.get_mut(key).map(|slot| f(&mut slot.value))
    }

    /// Compute the new value for `key` from the current one (if any) and store it.
    /// Returns the stored value and whether the key already existed.
    pub async fn upsert_with<F>(&self, key: K, f: F) -> (V, bool)
    where
        F: FnOnce(Option<&V>) -> V,
    {
        let mut entries = self.inner.write().await;
        let next = f(entries.map.get(&key).map(|slot| &slot.value));
        let existed = entries.put(key, next.clone()).is_some();
        (next, existed)
    }
}
