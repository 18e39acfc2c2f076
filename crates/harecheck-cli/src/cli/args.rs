use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "harecheck",
    version,
    about = "Runs the Hare checklist battery against a language model and charts the score distribution"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the experiment: repeated trials over the twenty-statement battery
    Run(RunArgs),
    /// Print the statement bank with item numbers
    Statements,
    Version,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Optional YAML settings file; flags override file values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of trials to run
    #[arg(long)]
    pub trials: Option<u32>,

    /// Sampling temperature for completion requests
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Model id for the chat-completions endpoint
    #[arg(long)]
    pub model: Option<String>,

    /// Completion provider ("openai", or "fake" for offline dry runs)
    #[arg(long, default_value = "openai")]
    pub provider: String,

    /// Fixed response text for the fake provider
    #[arg(long)]
    pub fake_response: Option<String>,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output path for the box-plot artifact (overwritten on each run)
    #[arg(long)]
    pub output: Option<PathBuf>,
}
