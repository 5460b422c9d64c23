use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

use super::Store;
use crate::error::{Error, Result};

/// Key for a memoized call: the function name plus its argument.
pub fn call_key(function: &str, arg: impl Display) -> String {
    format!("{function}_{arg}")
}

/// Key for a named slot such as the last report snapshot.
pub fn slot_key(name: &str) -> String {
    format!("slot_{name}")
}

/// Typed view over a [`Store`]. Values are kept as JSON.
pub struct Cache<S> {
    store: S,
}

impl<S: Store> Cache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.load(key).await? {
            Some(raw) => decode(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.store.save(key, encode(key, value)?).await
    }

    /// Stores `value` and returns the previously stored value, if any.
    ///
    /// If the previous value cannot be decoded it is put back and the call
    /// fails, so the slot ends up as it was.
    pub async fn swap<T>(&self, key: &str, value: &T) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        let Some(raw) = self.store.swap(key, encode(key, value)?).await? else {
            return Ok(None);
        };
        match decode(key, &raw) {
            Ok(previous) => Ok(Some(previous)),
            Err(err) => {
                log::warn!("restoring undecodable cache entry {key:?}");
                self.store.save(key, raw).await?;
                Err(err)
            }
        }
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| Error::CacheEncode {
        key: key.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| Error::CorruptCache {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_keys() {
        assert_eq!(call_key("rate_for", "2022-01-10"), "rate_for_2022-01-10");
        assert_eq!(slot_key("results"), "slot_results");
    }

    #[tokio::test]
    async fn test_decimal_keeps_exact_scale() -> Result<()> {
        let cache = Cache::new(MemoryStore::new());
        cache.set("rate", &dec!(2.7000)).await?;

        let cached: Decimal = cache.get("rate").await?.unwrap();
        assert_eq!(cached.to_string(), "2.7000");
        Ok(())
    }

    #[tokio::test]
    async fn test_swap_typed() -> Result<()> {
        let cache = Cache::new(MemoryStore::new());

        assert_eq!(cache.swap("slot", &vec![1, 2]).await?, None);
        assert_eq!(cache.swap("slot", &vec![3]).await?, Some(vec![1, 2]));
        assert_eq!(cache.get::<Vec<i32>>("slot").await?, Some(vec![3]));
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_entry() -> Result<()> {
        let cache = Cache::new(MemoryStore::new());
        cache.store().save("rate", "not json".to_string()).await?;

        let result = cache.get::<Decimal>("rate").await;
        assert!(matches!(result, Err(Error::CorruptCache { key, .. }) if key == "rate"));
        Ok(())
    }

    #[tokio::test]
    async fn test_swap_over_corrupt_entry_keeps_it() -> Result<()> {
        let cache = Cache::new(MemoryStore::new());
        cache.store().save("slot", "not json".to_string()).await?;

        let result = cache.swap("slot", &vec![1]).await;
        assert!(matches!(result, Err(Error::CorruptCache { key, .. }) if key == "slot"));
        assert_eq!(
            cache.store().load("slot").await?,
            Some("not json".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_unencodable_value() -> Result<()> {
        let cache = Cache::new(MemoryStore::new());
        let mut value = std::collections::HashMap::new();
        value.insert((1, 2), "tuple keys are not JSON object keys");

        let result = cache.set("map", &value).await;
        assert!(matches!(result, Err(Error::CacheEncode { key, .. }) if key == "map"));
        assert_eq!(cache.store().load("map").await?, None);
        Ok(())
    }
}
