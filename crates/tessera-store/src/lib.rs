//! Tessera Store — backends for the shared session store.
//!
//! This crate provides:
//! - Connection configuration ([`StoreConfig`])
//! - A Redis backend for multi-instance deployments ([`RedisStore`])
//! - An in-process backend for tests and single-node use ([`MemoryStore`])
//! - Error types ([`StoreError`])
//!
//! Both backends implement [`tessera_core::KeyValueStore`].

mod connection;
mod error;
mod memory;
mod redis_store;

pub use connection::StoreConfig;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;
