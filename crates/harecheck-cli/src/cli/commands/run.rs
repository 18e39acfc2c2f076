use crate::cli::args::RunArgs;
use harecheck_core::config::{self, RunConfig, MAX_COMPLETION_TOKENS};
use harecheck_core::experiment::run_experiment;
use harecheck_core::providers::llm::fake::FakeClient;
use harecheck_core::providers::llm::openai::OpenAiClient;
use harecheck_core::providers::llm::LlmClient;
use harecheck_core::report::boxplot::write_boxplot;

pub async fn execute(args: RunArgs) -> anyhow::Result<i32> {
    let mut cfg = match &args.config {
        Some(path) => config::load_config(path)?,
        None => RunConfig::default(),
    };
    if let Some(trials) = args.trials {
        cfg.trials = trials;
    }
    if let Some(temperature) = args.temperature {
        cfg.temperature = temperature;
    }
    if let Some(model) = args.model {
        cfg.model = model;
    }
    if let Some(output) = args.output {
        cfg.output = output;
    }

    let client: Box<dyn LlmClient> = match args.provider.as_str() {
        "fake" => Box::new(FakeClient::fixed(
            args.fake_response.unwrap_or_else(|| "A".to_string()),
        )),
        "openai" => {
            let api_key = args.api_key.ok_or_else(|| {
                anyhow::anyhow!("no API key: pass --api-key or set OPENAI_API_KEY")
            })?;
            Box::new(OpenAiClient::new(
                cfg.model.clone(),
                api_key,
                cfg.temperature,
                MAX_COMPLETION_TOKENS,
            ))
        }
        other => anyhow::bail!("unknown provider '{}' (expected 'openai' or 'fake')", other),
    };

    tracing::info!("{} Started.", crate::APP_NAME);
    let scores = run_experiment(client.as_ref(), cfg.trials).await?;
    write_boxplot(&scores, &cfg.output)?;
    println!("Done.");
    Ok(0)
}
