//! Shared store connection settings.

/// Configuration for connecting to the shared Redis-compatible store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Hostname or IP address (e.g., `127.0.0.1`).
    pub host: String,
    pub port: u16,
    /// Logical database index.
    pub database: i64,
    /// ACL username, if the server requires one.
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 6379,
            database: 0,
            username: None,
            password: None,
        }
    }
}

impl StoreConfig {
    /// Build a `redis://` URL. Credentials are percent-encoded.
    pub fn connection_url(&self) -> String {
        let auth = match (&self.username, &self.password) {
            (Some(user), Some(pass)) => format!(
                "{}:{}@",
                urlencoding::encode(user),
                urlencoding::encode(pass)
            ),
            (None, Some(pass)) => format!(":{}@", urlencoding::encode(pass)),
            (Some(user), None) => format!("{}@", urlencoding::encode(user)),
            (None, None) => String::new(),
        };

        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        format!("redis://{auth}{host}:{}/{}", self.port, self.database)
    }
}
