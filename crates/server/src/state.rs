use std::fmt;
use std::sync::Arc;

use service::games::GameGenerator;
use service::items::{InMemoryItemStore, ItemStore};
use service::tasks::{InMemoryTaskStore, TaskStore};

/// Which HTTP surface a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Items,
    ItemsExtended,
    Games,
    Tasks,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::ItemsExtended => "items-extended",
            Self::Games => "games",
            Self::Tasks => "tasks",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared handler state. Every service gets its own fresh stores; handlers
/// of a given kind only touch the part they need.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub games: Arc<GameGenerator>,
}

impl AppState {
    /// Empty in-memory stores; `games_seed` fixes the game RNG.
    pub fn new(games_seed: Option<u64>) -> Self {
        Self {
            items: Arc::new(InMemoryItemStore::new()),
            tasks: Arc::new(InMemoryTaskStore::new()),
            games: Arc::new(GameGenerator::new(games_seed)),
        }
    }
}
