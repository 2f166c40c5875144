//! `AiClient` and `ChatProvider` implementations for `GeminiClient`.

use async_trait::async_trait;
use tracing::debug;

use crate::remote::{ChatProvider, HistoryChat, RemoteChat};
use crate::{AiClient, AiError, AiResponse, Turn};

use super::client::{classify_http_error, transport_error, GeminiClient};

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        turns: &[Turn],
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(system_instruction, turns);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = turns.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            debug!(%status, "Gemini API error response");
            return Err(classify_http_error(status, &text));
        }

        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| AiError::MalformedResponse(e.to_string()))?;

        self.parse_response(json)
    }
}

#[async_trait]
impl ChatProvider for GeminiClient {
    async fn create_session(
        &self,
        system_instruction: &str,
    ) -> Result<Box<dyn RemoteChat>, AiError> {
        debug!(model = %self.config.model, "opening Gemini chat");
        Ok(Box::new(HistoryChat::new(self.clone(), system_instruction)))
    }
}
