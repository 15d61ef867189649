pub mod store;

pub use store::{InMemoryItemStore, ItemStore};
