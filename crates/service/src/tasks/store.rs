use async_trait::async_trait;
use chrono::Utc;
use models::{NewTask, Task, TaskPatch};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::MemoryMapStore;

/// Trait abstraction for task storage, keyed by a server-generated id.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Assigns `id`, `created_at` and `completed = false`.
    async fn create(&self, input: NewTask) -> Result<Task, ServiceError>;
    async fn get(&self, id: &str) -> Result<Task, ServiceError>;
    async fn list(&self) -> Vec<Task>;
    /// Merge only the fields set in `patch`.
    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, ServiceError>;
    async fn set_completed(&self, id: &str, completed: bool) -> Result<Task, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

pub struct InMemoryTaskStore {
    store: MemoryMapStore<String, Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self { store: MemoryMapStore::new("Task") }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, input: NewTask) -> Result<Task, ServiceError> {
        let task = Task::new(Uuid::new_v4().to_string(), Utc::now(), input);
        let created = self.store.insert(task.id.clone(), task).await?;
        info!(id = %created.id, title = %created.title, "created task");
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Task, ServiceError> {
        self.store.get(id).await
    }

    async fn list(&self) -> Vec<Task> {
        self.store.list().await
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, ServiceError> {
        let updated = self.store.update(id, |task| task.apply(patch)).await?;
        debug!(%id, "updated task");
        Ok(updated)
    }

    async fn set_completed(&self, id: &str, completed: bool) -> Result<Task, ServiceError> {
        let updated = self.store.update(id, |task| task.completed = completed).await?;
        debug!(%id, completed, "set task completion");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.store.remove(id).await?;
        info!(%id, "deleted task");
        Ok(())
    }
}
