use anyhow::Result;
use tokio::sync::mpsc;

use crate::config;
use crate::providers::{AssistantGateway, Fragment};
use crate::services::conversation::ConversationStore;

/// What became of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange is open; pump it with `next_fragment`.
    Started,
    /// Empty or whitespace-only input, silently ignored.
    IgnoredEmpty,
    /// A prior exchange is still in flight, silently ignored.
    IgnoredBusy,
}

struct Exchange {
    rx: mpsc::Receiver<Fragment>,
    handle: usize,
}

/// Glue between input, the gateway, and the store: validates prompts,
/// enforces single-flight, and applies fragments in arrival order.
pub struct ChatController {
    store: ConversationStore,
    gateway: AssistantGateway,
    in_flight: Option<Exchange>,
}

impl ChatController {
    pub fn new(store: ConversationStore, gateway: AssistantGateway) -> Self {
        Self {
            store,
            gateway,
            in_flight: None,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// True while an exchange is in flight. Gates submission and the
    /// thinking indicator.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate and dispatch one prompt. At most one exchange can be open at
    /// a time; rejected submissions leave the conversation untouched.
    pub async fn submit(&mut self, input: &str, deep_thought: bool) -> Result<SubmitOutcome> {
        let prompt = input.trim();
        if prompt.is_empty() {
            return Ok(SubmitOutcome::IgnoredEmpty);
        }
        if self.in_flight.is_some() {
            return Ok(SubmitOutcome::IgnoredBusy);
        }

        let handle = self.store.append_user_and_placeholder(prompt).await?;
        let rx = self.gateway.stream_response(prompt, deep_thought);
        self.in_flight = Some(Exchange { rx, handle });
        Ok(SubmitOutcome::Started)
    }

    /// Pump one fragment of the open exchange into the store and hand it
    /// back for display. `None` means the exchange is complete (or none is
    /// open); the busy flag drops with it.
    pub async fn next_fragment(&mut self) -> Result<Option<Fragment>> {
        let Some(exchange) = self.in_flight.as_mut() else {
            return Ok(None);
        };
        let handle = exchange.handle;
        let received = exchange.rx.recv().await;

        match received {
            Some(fragment) => {
                if let Err(e) = self.store.apply_delta(handle, &fragment).await {
                    tracing::error!("Failed to apply reply fragment: {e}");
                    self.in_flight = None;
                    self.store
                        .replace_with_error(handle, config::CONNECT_APOLOGY)
                        .await?;
                    return Ok(None);
                }
                Ok(Some(fragment))
            }
            None => {
                self.in_flight = None;
                Ok(None)
            }
        }
    }

    /// Reset the conversation to the greeting. Ignored while busy.
    pub async fn clear(&mut self) -> Result<bool> {
        if self.in_flight.is_some() {
            return Ok(false);
        }
        self.store.clear().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::models::{GroundingSource, Sender};
    use crate::providers::types::{BackendError, ReplyRequest, StreamEvent};
    use crate::providers::AssistantBackend;
    use crate::services::storage::Storage;

    /// Scripted backend that counts how many streams were opened.
    struct CountingBackend {
        calls: Arc<AtomicUsize>,
        script: Vec<StreamEvent>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl AssistantBackend for CountingBackend {
        async fn stream_reply(
            &self,
            _request: ReplyRequest,
            tx: mpsc::Sender<StreamEvent>,
        ) -> Result<(), BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.fail_with {
                return Err(BackendError::RequestFailed(message.clone()));
            }
            for event in self.script.clone() {
                let _ = tx.send(event).await;
            }
            Ok(())
        }
    }

    async fn controller_with(
        script: Vec<StreamEvent>,
        fail_with: Option<String>,
    ) -> (ChatController, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = Arc::new(CountingBackend {
            calls: calls.clone(),
            script,
            fail_with,
        });
        let gateway = AssistantGateway::new(backend, Some("test-key".into()), "persona".into());
        let store = ConversationStore::restore(Storage::open_in_memory().unwrap()).await;
        (ChatController::new(store, gateway), calls)
    }

    async fn drain(controller: &mut ChatController) {
        while controller.next_fragment().await.unwrap().is_some() {}
    }

    #[tokio::test]
    async fn successful_exchange_grows_by_two_and_dedups_sources() {
        let (mut controller, _) = controller_with(
            vec![
                StreamEvent::Token("He works ".into()),
                StreamEvent::Grounding(vec![GroundingSource {
                    uri: "https://a.example".into(),
                    title: "first".into(),
                }]),
                StreamEvent::Token("with data.".into()),
                StreamEvent::Grounding(vec![GroundingSource {
                    uri: "https://a.example".into(),
                    title: "second".into(),
                }]),
                StreamEvent::Done,
            ],
            None,
        )
        .await;

        let before = controller.store().len();
        let outcome = controller.submit("What are his skills?", false).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Started);
        assert!(controller.is_busy());

        drain(&mut controller).await;
        assert!(!controller.is_busy());

        let messages = controller.store().messages();
        assert_eq!(messages.len(), before + 2);
        assert_eq!(messages[before].sender, Sender::User);
        assert_eq!(messages[before].text, "What are his skills?");

        let reply = &messages[before + 1];
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, "He works with data.");

        let sources = reply.sources.as_ref().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title, "second");
    }

    #[tokio::test]
    async fn rejecting_backend_yields_apology_bubble() {
        let (mut controller, _) =
            controller_with(Vec::new(), Some("connection refused".into())).await;

        let before = controller.store().len();
        controller.submit("hello", false).await.unwrap();
        drain(&mut controller).await;

        assert!(!controller.is_busy());
        let messages = controller.store().messages();
        assert_eq!(messages.len(), before + 2);
        assert_eq!(messages[before + 1].text, config::CONNECT_APOLOGY);
        assert!(messages[before + 1].sources.is_none());
    }

    #[tokio::test]
    async fn empty_and_whitespace_prompts_are_ignored() {
        let (mut controller, calls) = controller_with(vec![StreamEvent::Done], None).await;

        assert_eq!(
            controller.submit("", false).await.unwrap(),
            SubmitOutcome::IgnoredEmpty
        );
        assert_eq!(
            controller.submit("   \n", false).await.unwrap(),
            SubmitOutcome::IgnoredEmpty
        );
        assert_eq!(controller.store().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn second_submit_while_busy_is_a_no_op() {
        let (mut controller, calls) = controller_with(
            vec![StreamEvent::Token("reply".into()), StreamEvent::Done],
            None,
        )
        .await;

        assert_eq!(
            controller.submit("first", false).await.unwrap(),
            SubmitOutcome::Started
        );
        let len_after_first = controller.store().len();

        assert_eq!(
            controller.submit("second", false).await.unwrap(),
            SubmitOutcome::IgnoredBusy
        );
        assert_eq!(controller.store().len(), len_after_first);

        drain(&mut controller).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn prompt_is_trimmed_before_storage() {
        let (mut controller, _) = controller_with(vec![StreamEvent::Done], None).await;
        controller.submit("  padded question  ", true).await.unwrap();
        drain(&mut controller).await;
        assert_eq!(controller.store().messages()[1].text, "padded question");
    }

    #[tokio::test]
    async fn clear_is_rejected_while_busy() {
        let (mut controller, _) = controller_with(
            vec![StreamEvent::Token("x".into()), StreamEvent::Done],
            None,
        )
        .await;

        controller.submit("hi", false).await.unwrap();
        assert!(!controller.clear().await.unwrap());

        drain(&mut controller).await;
        assert!(controller.clear().await.unwrap());
        assert_eq!(controller.store().len(), 1);
    }
}
