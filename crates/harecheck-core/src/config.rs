use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TRIALS: u32 = 25;
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OUTPUT: &str = "psychopathy.svg";
/// Completion length cap sent with every request.
pub const MAX_COMPLETION_TOKENS: u32 = 500;

/// Run settings, loadable from YAML. Every field has a default so a partial
/// file works. The API key is deliberately not part of this struct; it comes
/// from the environment or a CLI flag only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default = "default_trials")]
    pub trials: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            temperature: DEFAULT_TEMPERATURE,
            model: DEFAULT_MODEL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

fn default_trials() -> u32 {
    DEFAULT_TRIALS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;
    let cfg: RunConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    Ok(cfg)
}
