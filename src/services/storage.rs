use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tokio::task;

use crate::config;

/// Keys under which values are persisted. Exact strings are part of the
/// storage contract and must not change.
pub mod keys {
    pub const CHAT_MESSAGES: &str = "chatMessages";
    pub const DEEP_THOUGHT: &str = "isDeepThought";
    pub const CURSOR_ENABLED: &str = "isCursorEnabled";
    pub const DEEP_THOUGHT_TOOLTIP_DISMISSED: &str = "deepThoughtTooltipDismissed";
}

/// Durable key-value store backing the conversation log and preferences.
#[derive(Debug, Clone)]
pub struct Storage {
    conn: Arc<Mutex<Connection>>,
}

impl Storage {
    pub async fn open() -> Result<Self> {
        let path = Self::storage_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open storage at {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        let storage = Storage {
            conn: Arc::new(Mutex::new(conn)),
        };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage {
            conn: Arc::new(Mutex::new(conn)),
        };
        storage.run_migrations()?;
        Ok(storage)
    }

    fn storage_path() -> Result<PathBuf> {
        let data_dir = std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                std::env::var("HOME").map(|home| PathBuf::from(home).join(".local/share"))
            })
            .context("Neither XDG_DATA_HOME nor HOME is set")?;
        Ok(data_dir
            .join(config::APP_NAME)
            .join(format!("{}.db", config::APP_NAME)))
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER NOT NULL
            );",
        )?;

        let version: i32 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |row| row.get(0),
            )
            .unwrap_or(0);

        if version < 1 {
            conn.execute_batch(
                "CREATE TABLE storage (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                INSERT INTO schema_version (version) VALUES (1);",
            )?;
        }

        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.clone();
        let key = key.to_string();
        task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            let value: Option<String> = conn
                .query_row(
                    "SELECT value FROM storage WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
        .await?
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.clone();
        let key = key.to_string();
        let value = value.to_string();
        task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            conn.execute(
                "INSERT INTO storage (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
                params![key, value],
            )?;
            Ok(())
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_none() {
        let storage = Storage::open_in_memory().unwrap();
        assert!(storage.get(keys::CHAT_MESSAGES).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set(keys::DEEP_THOUGHT, "true").await.unwrap();
        assert_eq!(
            storage.get(keys::DEEP_THOUGHT).await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn set_overwrites() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set(keys::CHAT_MESSAGES, "[]").await.unwrap();
        storage.set(keys::CHAT_MESSAGES, "[1]").await.unwrap();
        assert_eq!(
            storage.get(keys::CHAT_MESSAGES).await.unwrap().as_deref(),
            Some("[1]")
        );
    }
}
