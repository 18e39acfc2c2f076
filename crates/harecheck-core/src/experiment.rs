use crate::providers::llm::LlmClient;
use crate::score::{compute_score, diagnose};
use crate::trial::run_trial;

/// Runs the full experiment: `trials` sequential passes over the statement
/// bank, one score per trial, logged as it goes. The first provider failure
/// aborts the run; completed scores are only held in memory.
pub async fn run_experiment(client: &dyn LlmClient, trials: u32) -> anyhow::Result<Vec<u32>> {
    let mut scores = Vec::with_capacity(trials as usize);
    for trial in 0..trials {
        tracing::info!("Running test {}", trial);
        let tally = run_trial(client).await?;

        // Sanity check: every answer should have landed in the closed A/B/C set.
        if tally.has_unrecognized() {
            tracing::warn!("Some answers were invalid.");
        }

        tracing::info!("Answers: {}", tally);
        let score = compute_score(&tally);
        let diagnosis = diagnose(score);
        tracing::info!("Score: {} [{}]", score, diagnosis);
        scores.push(score);
    }
    Ok(scores)
}
