use async_trait::async_trait;
use tokio::sync::mpsc;

use super::types::{BackendError, ReplyRequest, StreamEvent};

/// A streaming text-generation service. One call opens one reply stream;
/// implementations hold no per-conversation state.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn stream_reply(
        &self,
        request: ReplyRequest,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<(), BackendError>;
}
