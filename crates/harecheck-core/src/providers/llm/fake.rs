use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Offline deterministic provider. Cycles through its response list so a
/// scripted sequence repeats across trials; a single-entry list behaves as a
/// fixed response. Used by tests and `--provider fake` dry runs.
#[derive(Debug)]
pub struct FakeClient {
    model: String,
    responses: Vec<String>,
    cursor: AtomicUsize,
}

impl FakeClient {
    pub fn fixed(response: impl Into<String>) -> Self {
        Self::cycle(vec![response.into()])
    }

    pub fn cycle(responses: Vec<String>) -> Self {
        assert!(!responses.is_empty(), "fake client needs at least one response");
        Self {
            model: "fake".to_string(),
            responses,
            cursor: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<LlmResponse> {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.responses.len();
        Ok(LlmResponse {
            text: self.responses[i].clone(),
            provider: self.provider_name().to_string(),
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_client_always_returns_the_same_text() {
        let client = FakeClient::fixed("B");
        for _ in 0..3 {
            assert_eq!(client.complete("any prompt").await.unwrap().text, "B");
        }
    }

    #[tokio::test]
    async fn cycling_client_wraps_around() {
        let client = FakeClient::cycle(vec!["A".into(), "B".into(), "C".into()]);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(client.complete("any prompt").await.unwrap().text);
        }
        assert_eq!(seen, ["A", "B", "C", "A", "B"]);
    }
}
