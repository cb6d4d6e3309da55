use futures::StreamExt;
use tokio::sync::mpsc;

use super::models::GeminiResponse;
use crate::models::GroundingSource;
use crate::providers::types::StreamEvent;

/// Incremental server-sent-events framing: bytes go in, complete event
/// payloads come out. Handles partial UTF-8 sequences at chunk boundaries and
/// normalizes the CRLF line endings the Gemini API emits.
#[derive(Default)]
struct SseBuffer {
    pending_bytes: Vec<u8>,
    text: String,
}

impl SseBuffer {
    fn push(&mut self, bytes: &[u8]) {
        self.pending_bytes.extend_from_slice(bytes);

        let decoded = match std::str::from_utf8(&self.pending_bytes) {
            Ok(s) => {
                let s = s.to_string();
                self.pending_bytes.clear();
                s
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                if valid_up_to == 0 {
                    return; // nothing decodable yet
                }
                let s = std::str::from_utf8(&self.pending_bytes[..valid_up_to])
                    .unwrap()
                    .to_string();
                self.pending_bytes.drain(..valid_up_to);
                s
            }
        };

        self.text.push_str(&decoded.replace("\r\n", "\n"));
    }

    /// Next complete event's `data:` payload, if one is buffered.
    fn next_payload(&mut self) -> Option<String> {
        loop {
            let event_end = self.text.find("\n\n")?;
            let event_text: String = self.text.drain(..event_end + 2).collect();

            let mut data = String::new();
            for line in event_text.lines() {
                if let Some(payload) = line.strip_prefix("data: ") {
                    data.push_str(payload);
                } else if let Some(payload) = line.strip_prefix("data:") {
                    data.push_str(payload);
                }
            }

            if !data.is_empty() {
                return Some(data);
            }
        }
    }
}

/// Decode one stream chunk into backend events. Text parts become tokens,
/// grounding chunks become one grounding batch, an embedded error object
/// terminates the stream.
fn chunk_events(response: GeminiResponse) -> Vec<StreamEvent> {
    if let Some(error) = response.error {
        let message = error.message.unwrap_or_else(|| "Unknown error".to_string());
        return vec![StreamEvent::Error(message)];
    }

    let mut events = Vec::new();
    let Some(candidate) = response.candidates.and_then(|c| c.into_iter().next()) else {
        return events;
    };

    if let Some(content) = candidate.content {
        for part in content.parts {
            if let Some(text) = part.text {
                events.push(StreamEvent::Token(text));
            }
        }
    }

    if let Some(chunks) = candidate
        .grounding_metadata
        .and_then(|m| m.grounding_chunks)
    {
        let sources: Vec<GroundingSource> = chunks
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .filter_map(|web| match (web.uri, web.title) {
                (Some(uri), Some(title)) => Some(GroundingSource { uri, title }),
                _ => None,
            })
            .collect();
        if !sources.is_empty() {
            events.push(StreamEvent::Grounding(sources));
        }
    }

    events
}

pub async fn forward_sse_stream(response: reqwest::Response, tx: mpsc::Sender<StreamEvent>) {
    let mut body = response.bytes_stream();
    let mut buffer = SseBuffer::default();

    while let Some(chunk) = body.next().await {
        let bytes = match chunk {
            Ok(b) => b,
            Err(e) => {
                let _ = tx
                    .send(StreamEvent::Error(format!("Stream error: {}", e)))
                    .await;
                return;
            }
        };

        buffer.push(&bytes);

        while let Some(payload) = buffer.next_payload() {
            let decoded: GeminiResponse = match serde_json::from_str(&payload) {
                Ok(r) => r,
                Err(e) => {
                    // Partial or malformed events occur; skip rather than abort.
                    tracing::warn!("Failed to parse SSE payload: {}", e);
                    continue;
                }
            };

            for event in chunk_events(decoded) {
                let is_error = matches!(event, StreamEvent::Error(_));
                if tx.send(event).await.is_err() || is_error {
                    return;
                }
            }
        }
    }

    let _ = tx.send(StreamEvent::Done).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sse_buffer_frames_events() {
        let mut buffer = SseBuffer::default();
        buffer.push(b"data: one\n\ndata: tw");
        assert_eq!(buffer.next_payload().as_deref(), Some("one"));
        assert_eq!(buffer.next_payload(), None);
        buffer.push(b"o\n\n");
        assert_eq!(buffer.next_payload().as_deref(), Some("two"));
    }

    #[test]
    fn sse_buffer_normalizes_crlf() {
        let mut buffer = SseBuffer::default();
        buffer.push(b"data: hi\r\n\r\n");
        assert_eq!(buffer.next_payload().as_deref(), Some("hi"));
    }

    #[test]
    fn sse_buffer_skips_non_data_events() {
        let mut buffer = SseBuffer::default();
        buffer.push(b": comment\n\ndata: real\n\n");
        assert_eq!(buffer.next_payload().as_deref(), Some("real"));
    }

    #[test]
    fn sse_buffer_holds_partial_utf8() {
        let mut buffer = SseBuffer::default();
        let message = "data: héllo\n\n".as_bytes();
        let split = 8; // inside the two-byte é sequence
        buffer.push(&message[..split]);
        assert_eq!(buffer.next_payload(), None);
        buffer.push(&message[split..]);
        assert_eq!(buffer.next_payload().as_deref(), Some("héllo"));
    }

    #[test]
    fn chunk_events_extracts_tokens_and_grounding() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "a"}, {"text": "b"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://x.example", "title": "X"}},
                        {"web": {"uri": "https://no-title.example"}}
                    ]
                }
            }]
        }"#;
        let events = chunk_events(serde_json::from_str(raw).unwrap());
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], StreamEvent::Token(t) if t == "a"));
        assert!(matches!(&events[1], StreamEvent::Token(t) if t == "b"));
        match &events[2] {
            StreamEvent::Grounding(sources) => {
                // the chunk missing a title is dropped
                assert_eq!(sources.len(), 1);
                assert_eq!(sources[0].uri, "https://x.example");
            }
            other => panic!("expected grounding event, got {:?}", other),
        }
    }

    #[test]
    fn chunk_events_surfaces_embedded_error() {
        let raw = r#"{"error": {"message": "quota exhausted"}}"#;
        let events = chunk_events(serde_json::from_str(raw).unwrap());
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], StreamEvent::Error(m) if m == "quota exhausted"));
    }
}
