//! A bounded in-memory cache, emptied on shutdown.

use async_trait::async_trait;
use lifecycle_framework::{BoxError, Startable, Stoppable};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::CacheSettings;

pub struct Cache {
    capacity: usize,
    entries: Mutex<Option<HashMap<String, String>>>,
}

impl Cache {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            capacity: settings.capacity,
            entries: Mutex::new(None),
        }
    }

    /// Stores a value. Returns false when the cache is offline or full.
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.as_mut() {
            Some(map) if map.len() < self.capacity => {
                map.insert(key.into(), value.into());
                true
            }
            _ => false,
        }
    }

    /// Reads a value, if the cache is online and holds the key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .as_ref()
            .and_then(|map| map.get(key).cloned())
    }
}

#[async_trait]
impl Startable for Cache {
    async fn start(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        if entries.is_some() {
            return Err("cache already online".into());
        }
        *entries = Some(HashMap::new());
        info!(capacity = self.capacity, "cache online");
        Ok(())
    }
}

#[async_trait]
impl Stoppable for Cache {
    async fn stop(&self, _shutdown: CancellationToken) -> Result<(), BoxError> {
        let dropped = self.entries.lock().expect("cache lock poisoned").take();
        if let Some(map) = dropped {
            info!(evicted = map.len(), "cache cleared");
        }
        Ok(())
    }
}
