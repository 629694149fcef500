use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "pricer.toml";

/// Runtime configuration for a batch pricing run
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Path of the plain-text quote file to price
    #[serde(default = "default_input_path")]
    pub input_path: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
        }
    }
}

impl BatchConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load `pricer.toml` from the working directory when present, otherwise
    /// fall back to the built-in defaults.
    pub fn load() -> Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_input_path() -> String {
    "input.txt".to_string()
}
