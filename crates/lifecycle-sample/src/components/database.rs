//! A stand-in database pool with a real lifecycle.

use async_trait::async_trait;
use lifecycle_framework::{BoxError, Startable, Stoppable};
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::DatabaseSettings;

/// The "pool": enough state to make startup and shutdown observable.
struct Pool {
    connections: u32,
}

pub struct Database {
    settings: DatabaseSettings,
    pool: Mutex<Option<Pool>>,
}

impl Database {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            pool: Mutex::new(None),
        }
    }

    /// True while the pool is open.
    pub fn is_connected(&self) -> bool {
        self.pool.lock().expect("pool lock poisoned").is_some()
    }
}

#[async_trait]
impl Startable for Database {
    async fn start(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        if self.settings.url.is_empty() {
            return Err("database url is empty".into());
        }
        let mut pool = self.pool.lock().expect("pool lock poisoned");
        if pool.is_some() {
            return Err("database pool already open".into());
        }
        *pool = Some(Pool {
            connections: self.settings.max_connections,
        });
        info!(url = %self.settings.url, connections = self.settings.max_connections, "database pool open");
        Ok(())
    }
}

#[async_trait]
impl Stoppable for Database {
    async fn stop(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        let closed = self.pool.lock().expect("pool lock poisoned").take();
        if let Some(pool) = closed {
            info!(connections = pool.connections, "database pool closed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_close_round_trip() {
        let db = Database::new(DatabaseSettings::default());
        let token = CancellationToken::new();
        assert!(!db.is_connected());

        db.start(token.clone()).await.unwrap();
        assert!(db.is_connected());

        db.stop(token.clone()).await.unwrap();
        assert!(!db.is_connected());
    }

    #[tokio::test]
    async fn empty_url_fails_startup() {
        let db = Database::new(DatabaseSettings {
            url: String::new(),
            ..DatabaseSettings::default()
        });
        assert!(db.start(CancellationToken::new()).await.is_err());
        assert!(!db.is_connected());
    }

    #[tokio::test]
    async fn double_start_is_an_error() {
        let db = Database::new(DatabaseSettings::default());
        let token = CancellationToken::new();
        db.start(token.clone()).await.unwrap();
        assert!(db.start(token.clone()).await.is_err());
    }
}
