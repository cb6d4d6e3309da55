use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A citation returned by the backend's search-augmentation tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

/// One turn in the conversation.
///
/// Assistant turns are created empty and grow in place while a reply streams;
/// `sources` is attached at most once, when the stream completes. User turns
/// are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GroundingSource>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sources: None,
        }
    }

    pub fn assistant_placeholder() -> Self {
        Self {
            sender: Sender::Assistant,
            text: String::new(),
            sources: None,
        }
    }

    pub fn greeting() -> Self {
        Self {
            sender: Sender::Assistant,
            text: config::GREETING.to_string(),
            sources: None,
        }
    }
}
