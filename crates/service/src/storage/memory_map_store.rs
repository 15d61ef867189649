use std::{borrow::Borrow, collections::HashMap, hash::Hash};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

struct Entries<K, V> {
    map: HashMap<K, V>,
    // insertion order of the live keys
    order: Vec<K>,
}

/// Generic in-memory key-value map store.
///
/// Keeps a `HashMap<K, V>` behind one `RwLock`, plus the insertion order so
/// listings are stable. Check-and-mutate operations run under a single write
/// guard, so two racing inserts of the same key cannot both succeed.
/// `entity` names the record kind in error messages ("Task not found").
pub struct MemoryMapStore<K, V> {
    inner: RwLock<Entries<K, V>>,
    entity: &'static str,
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty store.
    pub fn new(entity: &'static str) -> Self {
        Self {
            inner: RwLock::new(Entries { map: HashMap::new(), order: Vec::new() }),
            entity,
        }
    }

    /// Insert under a fresh key; an existing key is left untouched.
    pub async fn insert(&self, key: K, value: V) -> Result<V, ServiceError> {
        let mut entries = self.inner.write().await;
        if entries.map.contains_key(&key) {
            return Err(ServiceError::duplicate(self.entity));
        }
        entries.order.push(key.clone());
        entries.map.insert(key, value.clone());
        Ok(value)
    }

    /// Get value by key.
    pub async fn get<Q>(&self, key: &Q) -> Result<V, ServiceError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let entries = self.inner.read().await;
        entries.map.get(key).cloned().ok_or_else(|| ServiceError::not_found(self.entity))
    }

    /// All values in insertion order.
    pub async fn list(&self) -> Vec<V> {
        let entries = self.inner.read().await;
        entries.order.iter().filter_map(|k| entries.map.get(k).cloned()).collect()
    }

    /// Mutate the stored value in place and return the result.
    pub async fn update<Q, F>(&self, key: &Q, f: F) -> Result<V, ServiceError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: FnOnce(&mut V),
    {
        let mut entries = self.inner.write().await;
        let value = entries.map.get_mut(key).ok_or_else(|| ServiceError::not_found(self.entity))?;
        f(value);
        Ok(value.clone())
    }

    /// Remove a key, returning the value it held.
    pub async fn remove<Q>(&self, key: &Q) -> Result<V, ServiceError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let mut entries = self.inner.write().await;
        let removed = entries.map.remove(key).ok_or_else(|| ServiceError::not_found(self.entity))?;
        entries.order.retain(|k| <K as Borrow<Q>>::borrow(k) != key);
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
