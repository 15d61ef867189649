use async_trait::async_trait;
use models::Item;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::storage::MemoryMapStore;

/// Trait abstraction for item storage, keyed by item name.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn create(&self, item: Item) -> Result<Item, ServiceError>;
    async fn get(&self, name: &str) -> Result<Item, ServiceError>;
    async fn list(&self) -> Vec<Item>;
    async fn delete(&self, name: &str) -> Result<(), ServiceError>;
}

/// Process-lifetime item store; contents vanish on restart.
pub struct InMemoryItemStore {
    store: MemoryMapStore<String, Item>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self { store: MemoryMapStore::new("Item") }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, item: Item) -> Result<Item, ServiceError> {
        let created = self.store.insert(item.name.clone(), item).await?;
        info!(name = %created.name, "created item");
        Ok(created)
    }

    async fn get(&self, name: &str) -> Result<Item, ServiceError> {
        self.store.get(name).await
    }

    async fn list(&self) -> Vec<Item> {
        self.store.list().await
    }

    async fn delete(&self, name: &str) -> Result<(), ServiceError> {
        self.store.remove(name).await?;
        debug!(%name, "deleted item");
        Ok(())
    }
}
