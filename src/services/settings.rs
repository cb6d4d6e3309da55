use anyhow::Result;

use crate::services::storage::{keys, Storage};

/// User preferences, loaded once at startup and written back on change.
/// Each value lives under its own storage key; `deep_thought` is passed
/// explicitly into every gateway call rather than read ambiently.
#[derive(Debug, Clone)]
pub struct Preferences {
    pub deep_thought: bool,
    pub cursor_enabled: bool,
    pub tooltip_dismissed: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            deep_thought: false,
            cursor_enabled: true,
            tooltip_dismissed: false,
        }
    }
}

impl Preferences {
    pub async fn load(storage: &Storage) -> Self {
        let defaults = Self::default();
        Self {
            deep_thought: load_bool(storage, keys::DEEP_THOUGHT, defaults.deep_thought).await,
            cursor_enabled: load_bool(storage, keys::CURSOR_ENABLED, defaults.cursor_enabled).await,
            tooltip_dismissed: storage
                .get(keys::DEEP_THOUGHT_TOOLTIP_DISMISSED)
                .await
                .ok()
                .flatten()
                .as_deref()
                == Some("true"),
        }
    }

    pub async fn set_deep_thought(&mut self, storage: &Storage, value: bool) -> Result<()> {
        self.deep_thought = value;
        storage
            .set(keys::DEEP_THOUGHT, &serde_json::to_string(&value)?)
            .await
    }

    pub async fn set_cursor_enabled(&mut self, storage: &Storage, value: bool) -> Result<()> {
        self.cursor_enabled = value;
        storage
            .set(keys::CURSOR_ENABLED, &serde_json::to_string(&value)?)
            .await
    }

    /// One-way: the first-use hint never comes back once dismissed.
    pub async fn dismiss_tooltip(&mut self, storage: &Storage) -> Result<()> {
        self.tooltip_dismissed = true;
        storage
            .set(keys::DEEP_THOUGHT_TOOLTIP_DISMISSED, "true")
            .await
    }
}

async fn load_bool(storage: &Storage, key: &str, default: bool) -> bool {
    match storage.get(key).await {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or(default),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_when_storage_is_empty() {
        let storage = Storage::open_in_memory().unwrap();
        let prefs = Preferences::load(&storage).await;
        assert!(!prefs.deep_thought);
        assert!(prefs.cursor_enabled);
        assert!(!prefs.tooltip_dismissed);
    }

    #[tokio::test]
    async fn changes_round_trip_through_storage() {
        let storage = Storage::open_in_memory().unwrap();
        let mut prefs = Preferences::load(&storage).await;
        prefs.set_deep_thought(&storage, true).await.unwrap();
        prefs.set_cursor_enabled(&storage, false).await.unwrap();
        prefs.dismiss_tooltip(&storage).await.unwrap();

        assert_eq!(
            storage.get(keys::DEEP_THOUGHT).await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(
            storage
                .get(keys::DEEP_THOUGHT_TOOLTIP_DISMISSED)
                .await
                .unwrap()
                .as_deref(),
            Some("true")
        );

        let reloaded = Preferences::load(&storage).await;
        assert!(reloaded.deep_thought);
        assert!(!reloaded.cursor_enabled);
        assert!(reloaded.tooltip_dismissed);
    }

    #[tokio::test]
    async fn malformed_value_falls_back_to_default() {
        let storage = Storage::open_in_memory().unwrap();
        storage.set(keys::DEEP_THOUGHT, "maybe").await.unwrap();
        let prefs = Preferences::load(&storage).await;
        assert!(!prefs.deep_thought);
    }
}
