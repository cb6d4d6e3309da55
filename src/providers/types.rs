use thiserror::Error;

use crate::models::GroundingSource;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Rate limited: retry after {retry_after_secs:?}s")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// One exchange's worth of parameters for the text-generation backend.
#[derive(Clone)]
pub struct ReplyRequest {
    pub api_key: String,
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
    /// Allow the backend to consult web search and return grounding sources.
    pub search_grounding: bool,
    /// Internal reasoning token budget, deep-thought mode only.
    pub thinking_budget: Option<u32>,
}

impl std::fmt::Debug for ReplyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyRequest")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("search_grounding", &self.search_grounding)
            .field("thinking_budget", &self.thinking_budget)
            .finish()
    }
}

/// Raw events a backend pushes while a reply streams. Grounding batches may
/// arrive interleaved with tokens and may repeat a uri; the gateway is
/// responsible for accumulation and dedup.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    Token(String),
    Grounding(Vec<GroundingSource>),
    Error(String),
    Done,
}

/// One increment of an assistant reply as consumed by the conversation store:
/// a text delta, a source list, or (rarely) both.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub text: Option<String>,
    pub sources: Option<Vec<GroundingSource>>,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sources: None,
        }
    }

    pub fn sources(sources: Vec<GroundingSource>) -> Self {
        Self {
            text: None,
            sources: Some(sources),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_api_key() {
        let request = ReplyRequest {
            api_key: "secret-key".into(),
            model: "test-model".into(),
            system_instruction: String::new(),
            prompt: "hello".into(),
            search_grounding: true,
            thinking_budget: None,
        };
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("***"));
    }
}
