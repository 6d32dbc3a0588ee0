//! Shared store contract.
//!
//! Every service instance talks to the same key-value service, so the
//! session layer needs nothing beyond atomic per-key get/set/delete.
//! All operations are async and fail fast: no retries, no timeouts
//! beyond what the backend client is configured with.

use crate::error::TesseraResult;

pub trait KeyValueStore: Send + Sync {
    /// Fetch the value at `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> impl Future<Output = TesseraResult<Option<String>>> + Send;

    /// Write `value` at `key`, replacing any previous value.
    ///
    /// With `ttl_secs` set the backend drops the key after that many
    /// seconds.
    fn set(
        &self,
        key: &str,
        value: String,
        ttl_secs: Option<u64>,
    ) -> impl Future<Output = TesseraResult<()>> + Send;

    /// Overwrite `value` at `key` only if the key currently exists,
    /// keeping whatever expiry it already has. Returns `false` (and
    /// writes nothing) when the key is absent.
    fn replace(&self, key: &str, value: String) -> impl Future<Output = TesseraResult<bool>> + Send;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> impl Future<Output = TesseraResult<()>> + Send;
}
