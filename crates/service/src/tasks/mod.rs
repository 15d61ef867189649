pub mod store;

pub use store::{InMemoryTaskStore, TaskStore};
