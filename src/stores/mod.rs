//! Storage layer for resolved rates and the last report snapshot. Provides:
//! - A raw key/value [`Store`] with an atomic [`Store::swap`]
//! - A directory-backed implementation ([`FileStore`]) that persists across runs
//! - An in-memory implementation ([`MemoryStore`]) for tests and benchmarks
//! - A typed JSON layer on top of any store ([`Cache`])
//!
//! Entries never expire. Runs against one store are assumed not to overlap.

mod cache;
mod file;
mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use cache::{call_key, slot_key, Cache};
pub use file::FileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: String) -> Result<()>;

    /// Stores `value` under `key` and returns what was there before, as one
    /// operation.
    async fn swap(&self, key: &str, value: String) -> Result<Option<String>>;
}
