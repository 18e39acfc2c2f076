pub mod fake;
pub mod openai;

use crate::model::LlmResponse;
use async_trait::async_trait;

/// Completion provider seam. The experiment only ever needs one generation
/// per prompt; sampling parameters live on the concrete client.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}
