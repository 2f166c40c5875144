//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use reqwest::StatusCode;

use crate::{AiError, AiResponse, Role, TokenUsage, Turn};

use super::config::GeminiConfig;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::RemoteUnavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(
        &self,
        system_instruction: &str,
        turns: &[Turn],
    ) -> serde_json::Value {
        let contents: Vec<_> = turns
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": turn.content }]
                })
            })
            .collect();

        // Forwarded verbatim, even when empty; the API decides what it accepts.
        let mut body = serde_json::json!({
            "contents": contents,
            "systemInstruction": {
                "parts": [{ "text": system_instruction }]
            }
        });

        let mut generation = serde_json::Map::new();
        if let Some(max) = self.config.max_output_tokens {
            generation.insert("maxOutputTokens".into(), max.into());
        }
        if let Some(temperature) = self.config.temperature {
            generation.insert("temperature".into(), temperature.into());
        }
        if !generation.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation);
        }

        body
    }

    /// Parse a successful `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let first = json["candidates"].as_array().and_then(|c| c.first());

        let Some(first) = first else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::RemoteRejected {
                    status: StatusCode::OK.as_u16(),
                    message: format!("prompt blocked: {reason}"),
                });
            }
            return Err(AiError::MalformedResponse(
                "no candidates in response".to_string(),
            ));
        };

        let mut content = String::new();
        if let Some(parts) = first["content"]["parts"].as_array() {
            for part in parts {
                // Thought summaries are not part of the reply.
                if part["thought"].as_bool() == Some(true) {
                    continue;
                }
                if let Some(text) = part["text"].as_str() {
                    content.push_str(text);
                }
            }
        }

        if content.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("UNKNOWN");
            return Err(AiError::EmptyReply(reason.to_string()));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

/// Map a non-2xx response to the error taxonomy.
///
/// 5xx means the service is unavailable; a 400 that names the system
/// instruction is an invalid instruction; any other status is a rejection.
pub(crate) fn classify_http_error(status: StatusCode, body: &str) -> AiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    if status.is_server_error() {
        return AiError::RemoteUnavailable(format!("HTTP {}: {message}", status.as_u16()));
    }
    if status == StatusCode::BAD_REQUEST && mentions_system_instruction(&message) {
        return AiError::InvalidInstruction(message);
    }
    AiError::RemoteRejected {
        status: status.as_u16(),
        message,
    }
}

fn mentions_system_instruction(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    ["system_instruction", "systeminstruction", "system instruction"]
        .iter()
        .any(|needle| lower.contains(needle))
}

pub(crate) fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::RemoteUnavailable("request timed out".to_string())
    } else {
        AiError::RemoteUnavailable(e.to_string())
    }
}
