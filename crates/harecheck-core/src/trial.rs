use crate::classify::classify;
use crate::model::AnswerTally;
use crate::providers::llm::LlmClient;
use crate::statements::{battery_prompt, STATEMENTS};

/// One full pass over the statement bank, strictly in bank order. Each
/// completion is awaited before the next request goes out, so the Q/A debug
/// log reads in item order. A provider error aborts the pass.
pub async fn run_trial(client: &dyn LlmClient) -> anyhow::Result<AnswerTally> {
    let mut tally = AnswerTally::new();
    for statement in STATEMENTS {
        tracing::debug!("Q: {}", statement);
        let response = client.complete(&battery_prompt(statement)).await?;
        tracing::debug!("A: {}", response.text);
        tally.record(classify(&response.text));
    }
    Ok(tally)
}
