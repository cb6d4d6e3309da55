use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::mpsc;

use super::models::*;
use super::stream::forward_sse_stream;
use crate::providers::traits::AssistantBackend;
use crate::providers::types::{BackendError, ReplyRequest, StreamEvent};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiBackend {
    client: Client,
    base_url: String,
}

impl GeminiBackend {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Parse an API error response body into a user-friendly message.
    fn parse_error_message(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(msg) = parsed["error"]["message"].as_str() {
                return format!("HTTP {}: {}", status.as_u16(), msg);
            }
        }
        format!("HTTP {}: Request failed", status.as_u16())
    }

    fn build_body(request: &ReplyRequest) -> GeminiRequest {
        let tools = request.search_grounding.then(|| {
            vec![GeminiTool {
                google_search: GoogleSearchTool {},
            }]
        });

        let generation_config = request.thinking_budget.map(|budget| GeminiGenerationConfig {
            thinking_config: Some(GeminiThinkingConfig {
                thinking_budget: budget,
            }),
        });

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: Some(request.prompt.clone()),
                }],
            }],
            system_instruction: Some(GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: Some(request.system_instruction.clone()),
                }],
            }),
            tools,
            generation_config,
        }
    }
}

impl Default for GeminiBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantBackend for GeminiBackend {
    async fn stream_reply(
        &self,
        request: ReplyRequest,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<(), BackendError> {
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, request.model
        );

        let body = Self::build_body(&request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            return Err(BackendError::AuthError("Invalid API key".to_string()));
        }

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(BackendError::RateLimited {
                retry_after_secs: None,
            });
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed(Self::parse_error_message(
                status, &body,
            )));
        }

        forward_sse_stream(response, tx).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(search: bool, budget: Option<u32>) -> ReplyRequest {
        ReplyRequest {
            api_key: "k".into(),
            model: "m".into(),
            system_instruction: "persona".into(),
            prompt: "question".into(),
            search_grounding: search,
            thinking_budget: budget,
        }
    }

    #[test]
    fn quick_mode_body_carries_search_tool_only() {
        let body = GeminiBackend::build_body(&request(true, None));
        assert!(body.tools.is_some());
        assert!(body.generation_config.is_none());

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["tools"][0]["googleSearch"], serde_json::json!({}));
        assert_eq!(json["contents"][0]["parts"][0]["text"], "question");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "persona");
    }

    #[test]
    fn deep_mode_body_carries_thinking_budget_only() {
        let body = GeminiBackend::build_body(&request(false, Some(32768)));
        assert!(body.tools.is_none());

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            32768
        );
    }

    #[test]
    fn error_message_prefers_api_body() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        let body = r#"{"error": {"message": "Invalid model"}}"#;
        assert_eq!(
            GeminiBackend::parse_error_message(status, body),
            "HTTP 400: Invalid model"
        );
        assert_eq!(
            GeminiBackend::parse_error_message(status, "not json"),
            "HTTP 400: Request failed"
        );
    }
}
