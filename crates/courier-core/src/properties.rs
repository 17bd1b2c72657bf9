//! Persisted app properties (session, locale and friends).
//!
//! Stores are passed explicitly to whatever needs them; there is no
//! process-wide property bag.

use std::collections::HashMap;

use libsql::Connection;
use tokio::sync::RwLock;

use crate::error::Result;

/// Key/value property storage (async)
#[allow(async_fn_in_trait)]
pub trait PropertyStore {
    /// Read a property, `None` when it was never set
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a property, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a property. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Flush pending writes
    async fn save(&self) -> Result<()>;
}

/// Read a property, falling back to an empty string when it is missing.
pub async fn property_or_empty<S: PropertyStore>(store: &S, key: &str) -> Result<String> {
    Ok(store.get(key).await?.unwrap_or_default())
}

/// Set a property and flush it immediately.
pub async fn set_and_save<S: PropertyStore>(
    store: &S,
    key: &str,
    value: &str,
) -> Result<()> {
    store.set(key, value).await?;
    store.save().await
}

/// In-memory property store
#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `values`
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PropertyStore for MemoryPropertyStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.write().await.remove(key);
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        Ok(())
    }
}

/// libSQL implementation of `PropertyStore`
///
/// Writes are durable as soon as `set`/`remove` return, so `save` has
/// nothing left to do.
pub struct LibSqlPropertyStore<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlPropertyStore<'a> {
    /// Create a new store with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every stored property, sorted by key
    pub async fn list(&self) -> Result<Vec<(String, String)>> {
        let mut rows = self
            .conn
            .query("SELECT key, value FROM properties ORDER BY key", ())
            .await?;

        let mut properties = Vec::new();
        while let Some(row) = rows.next().await? {
            properties.push((row.get::<String>(0)?, row.get::<String>(1)?));
        }
        Ok(properties)
    }
}

impl PropertyStore for LibSqlPropertyStore<'_> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut rows = self
            .conn
            .query("SELECT value FROM properties WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(row.get::<String>(0)?))
        } else {
            Ok(None)
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.conn
            .execute(
                "INSERT OR REPLACE INTO properties (key, value, updated_at) VALUES (?, ?, ?)",
                libsql::params![key, value, now],
            )
            .await?;
        tracing::debug!("Stored property {key}");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM properties WHERE key = ?", [key])
            .await?;
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        Ok(())
    }
}
