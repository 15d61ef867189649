//! Storage abstractions for service layer
//!
//! Contains the reusable in-memory map every resource store is built on.

pub mod memory_map_store;

pub use memory_map_store::MemoryMapStore;
