use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::Store;
use crate::error::Result;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: String) -> Result<()> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn swap(&self, key: &str, value: String) -> Result<Option<String>> {
        Ok(self.entries.lock().await.insert(key.to_string(), value))
    }
}
