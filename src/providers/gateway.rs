use std::sync::Arc;

use tokio::sync::mpsc;

use super::traits::AssistantBackend;
use super::types::{Fragment, ReplyRequest, StreamEvent};
use crate::config;
use crate::models::GroundingSource;

const FRAGMENT_CHANNEL_CAPACITY: usize = 64;

/// Translates one `(prompt, mode)` pair into an ordered, finite sequence of
/// reply fragments. Holds no state between calls; every failure mode
/// collapses into a single terminal apology fragment instead of an error.
pub struct AssistantGateway {
    backend: Arc<dyn AssistantBackend>,
    api_key: Option<String>,
    system_instruction: String,
}

impl AssistantGateway {
    pub fn new(
        backend: Arc<dyn AssistantBackend>,
        api_key: Option<String>,
        system_instruction: String,
    ) -> Self {
        Self {
            backend,
            api_key,
            system_instruction,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Open one reply stream. Text deltas arrive in generation order; if the
    /// backend reported grounding sources, their deduplicated union follows
    /// as exactly one trailing fragment. The channel closes when the reply is
    /// complete.
    pub fn stream_response(&self, prompt: &str, deep_thought: bool) -> mpsc::Receiver<Fragment> {
        let (tx, rx) = mpsc::channel(FRAGMENT_CHANNEL_CAPACITY);

        let Some(api_key) = self.api_key.clone() else {
            let _ = tx.try_send(Fragment::text(config::CONNECT_APOLOGY));
            return rx;
        };

        let request = ReplyRequest {
            api_key,
            model: if deep_thought {
                config::DEEP_MODEL
            } else {
                config::QUICK_MODEL
            }
            .to_string(),
            system_instruction: self.system_instruction.clone(),
            prompt: prompt.to_string(),
            search_grounding: !deep_thought,
            thinking_budget: deep_thought.then_some(config::DEEP_THINKING_BUDGET),
        };

        let backend = self.backend.clone();
        tokio::spawn(async move {
            let (event_tx, mut event_rx) = mpsc::channel(FRAGMENT_CHANNEL_CAPACITY);

            let _backend_task = tokio::spawn(async move {
                if let Err(e) = backend.stream_reply(request, event_tx.clone()).await {
                    let _ = event_tx.send(StreamEvent::Error(e.to_string())).await;
                }
            });

            let mut sources: Vec<GroundingSource> = Vec::new();

            while let Some(event) = event_rx.recv().await {
                match event {
                    StreamEvent::Token(text) => {
                        if tx.send(Fragment::text(text)).await.is_err() {
                            return; // receiver dropped, exchange abandoned
                        }
                    }
                    StreamEvent::Grounding(batch) => sources.extend(batch),
                    StreamEvent::Error(message) => {
                        tracing::warn!("assistant reply failed: {message}");
                        let _ = tx.send(Fragment::text(config::CONNECT_APOLOGY)).await;
                        return;
                    }
                    StreamEvent::Done => break,
                }
            }

            let sources = dedup_sources(sources);
            if !sources.is_empty() {
                let _ = tx.send(Fragment::sources(sources)).await;
            }
        });

        rx
    }
}

/// Collapse repeated uris: first-seen position, last-seen title.
fn dedup_sources(sources: Vec<GroundingSource>) -> Vec<GroundingSource> {
    let mut deduped: Vec<GroundingSource> = Vec::with_capacity(sources.len());
    for source in sources {
        match deduped.iter_mut().find(|s| s.uri == source.uri) {
            Some(existing) => existing.title = source.title,
            None => deduped.push(source),
        }
    }
    deduped
}
