//! Service layer: the in-memory resource stores behind each HTTP surface
//! and the random game generator.
//! - Stores are explicit objects, shared through `Arc`, never globals.
//! - Every mutation completes under a single write lock.

pub mod errors;
pub mod games;
pub mod items;
pub mod storage;
pub mod tasks;
