use thiserror::Error;

/// Config read/parse failure. Fatal at the CLI boundary.
#[derive(Debug, Error)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
