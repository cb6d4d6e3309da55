use anyhow::{anyhow, Result};

use crate::models::Message;
use crate::providers::Fragment;
use crate::services::storage::{keys, Storage};

/// Single source of truth for the message log. Every mutation persists the
/// full log before returning, so a crash loses at most the in-flight delta of
/// the current stream.
pub struct ConversationStore {
    storage: Storage,
    messages: Vec<Message>,
}

impl ConversationStore {
    /// Load the persisted log. Absent key, malformed JSON, or an empty array
    /// all fall back to the single canned greeting; the store is never empty.
    pub async fn restore(storage: Storage) -> Self {
        let messages = match storage.get(keys::CHAT_MESSAGES).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Message>>(&raw) {
                Ok(messages) if !messages.is_empty() => messages,
                Ok(_) => vec![Message::greeting()],
                Err(e) => {
                    tracing::warn!("Stored conversation is unreadable, starting fresh: {e}");
                    vec![Message::greeting()]
                }
            },
            Ok(None) => vec![Message::greeting()],
            Err(e) => {
                tracing::warn!("Failed to read stored conversation, starting fresh: {e}");
                vec![Message::greeting()]
            }
        };

        Self { storage, messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    async fn persist(&self) -> Result<()> {
        let encoded = serde_json::to_string(&self.messages)?;
        self.storage.set(keys::CHAT_MESSAGES, &encoded).await
    }

    pub async fn append(&mut self, message: Message) -> Result<()> {
        self.messages.push(message);
        self.persist().await
    }

    /// Append the user's turn together with its empty assistant placeholder.
    /// Both are pushed before any suspension point and persisted in one
    /// write, so no observer sees the user message without its placeholder.
    /// Returns a handle to the placeholder for streaming updates.
    pub async fn append_user_and_placeholder(&mut self, prompt: &str) -> Result<usize> {
        self.messages.push(Message::user(prompt));
        self.messages.push(Message::assistant_placeholder());
        let handle = self.messages.len() - 1;
        self.persist().await?;
        Ok(handle)
    }

    /// Apply one streamed fragment: text is appended, sources replace any
    /// previous list wholesale.
    pub async fn apply_delta(&mut self, handle: usize, fragment: &Fragment) -> Result<()> {
        let message = self
            .messages
            .get_mut(handle)
            .ok_or_else(|| anyhow!("invalid message handle: {handle}"))?;

        if let Some(text) = &fragment.text {
            message.text.push_str(text);
        }
        if let Some(sources) = &fragment.sources {
            message.sources = Some(sources.clone());
        }

        self.persist().await
    }

    /// Overwrite the placeholder with a fixed user-facing failure text,
    /// discarding any partial reply.
    pub async fn replace_with_error(&mut self, handle: usize, error_text: &str) -> Result<()> {
        let message = self
            .messages
            .get_mut(handle)
            .ok_or_else(|| anyhow!("invalid message handle: {handle}"))?;

        message.text = error_text.to_string();
        message.sources = None;

        self.persist().await
    }

    /// Reset the log to the single canned greeting.
    pub async fn clear(&mut self) -> Result<()> {
        self.messages = vec![Message::greeting()];
        self.persist().await
    }
}
