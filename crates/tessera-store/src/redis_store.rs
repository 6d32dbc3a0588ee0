//! Redis implementation of [`KeyValueStore`].

use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use tessera_core::error::TesseraResult;
use tessera_core::store::KeyValueStore;
use tracing::info;

use crate::connection::StoreConfig;
use crate::error::StoreError;

/// Shared store backed by a Redis (or protocol-compatible) server,
/// version 6 or later (`KEEPTTL`).
///
/// Cloning is cheap: clones share one multiplexed connection. Failed
/// commands are reported as-is and never retried here.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connect to the server described by `config` and select its
    /// logical database.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        info!(
            host = %config.host,
            port = config.port,
            database = config.database,
            "Connecting to session store"
        );

        let client = redis::Client::open(config.connection_url())
            .map_err(|e| StoreError::Config(e.to_string()))?;
        let conn = client.get_multiplexed_async_connection().await?;

        info!("Successfully connected to session store");

        Ok(Self { conn })
    }

}

impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> TesseraResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await.map_err(StoreError::from)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl_secs: Option<u64>) -> TesseraResult<()> {
        let mut conn = self.conn.clone();
        match ttl_secs {
            Some(ttl) => {
                let _: () = conn
                    .set_ex(key, value, ttl)
                    .await
                    .map_err(StoreError::from)?;
            }
            None => {
                let _: () = conn.set(key, value).await.map_err(StoreError::from)?;
            }
        }
        Ok(())
    }

    async fn replace(&self, key: &str, value: String) -> TesseraResult<bool> {
        let mut conn = self.conn.clone();
        // SET XX replies nil when the key is absent.
        let reply: redis::Value = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("XX")
            .arg("KEEPTTL")
            .query_async(&mut conn)
            .await
            .map_err(StoreError::from)?;
        Ok(!matches!(reply, redis::Value::Nil))
    }

    async fn delete(&self, key: &str) -> TesseraResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await.map_err(StoreError::from)?;
        Ok(())
    }
}
