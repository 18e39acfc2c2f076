use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Every request is bounded; an unresponsive provider must not hang a trial.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Transient failures (connect/timeout/429/5xx) are retried with doubling
/// backoff up to this many attempts. Auth and malformed-request errors are
/// not retried.
const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

enum RequestFailure {
    Transient(anyhow::Error),
    Fatal(anyhow::Error),
}

pub struct OpenAiClient {
    pub model: String,
    api_key: String,
    pub temperature: f32,
    pub max_tokens: u32,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(model: String, api_key: String, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model,
            api_key,
            temperature,
            max_tokens,
            client: reqwest::Client::new(),
        }
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "top_p": 1,
            "frequency_penalty": 0,
            "presence_penalty": 0,
        })
    }

    async fn try_complete(&self, body: &serde_json::Value) -> Result<String, RequestFailure> {
        let resp = self
            .client
            .post(API_URL)
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let transient = e.is_timeout() || e.is_connect();
                let err = anyhow::anyhow!(e).context("chat API request failed");
                if transient {
                    RequestFailure::Transient(err)
                } else {
                    RequestFailure::Fatal(err)
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            let err = anyhow::anyhow!("chat API error (status {}): {}", status, error_text);
            return Err(if status.as_u16() == 429 || status.is_server_error() {
                RequestFailure::Transient(err)
            } else {
                RequestFailure::Fatal(err)
            });
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| RequestFailure::Fatal(anyhow::anyhow!(e).context("chat API response was not JSON")))?;

        json.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                RequestFailure::Fatal(anyhow::anyhow!("chat API response missing content"))
            })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<LlmResponse> {
        let body = self.request_body(prompt);

        let mut backoff = INITIAL_BACKOFF;
        let mut last_err = None;
        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_complete(&body).await {
                Ok(text) => {
                    return Ok(LlmResponse {
                        text,
                        provider: self.provider_name().to_string(),
                        model: self.model.clone(),
                    })
                }
                Err(RequestFailure::Fatal(err)) => return Err(err),
                Err(RequestFailure::Transient(err)) => {
                    tracing::warn!(
                        "completion attempt {}/{} failed: {:#}",
                        attempt,
                        MAX_ATTEMPTS,
                        err
                    );
                    last_err = Some(err);
                    if attempt < MAX_ATTEMPTS {
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                    }
                }
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("completion failed")))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
