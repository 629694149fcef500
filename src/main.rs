//! Batch Black-Scholes pricing CLI.
//!
//! Reads whitespace-delimited quote records (`S K T r sigma`) from a
//! plain-text file and prints call/put prices per record. The input path
//! resolves as: CLI argument > `VANILLA_PRICER_INPUT` environment variable
//! > `pricer.toml` > `input.txt`.

use std::env;
use std::process::ExitCode;

use vanilla_pricer::{batch, BatchConfig};

/// Environment variable overriding the configured input path.
const INPUT_ENV_VAR: &str = "VANILLA_PRICER_INPUT";

fn resolve_config() -> anyhow::Result<BatchConfig> {
    let mut config = BatchConfig::load()?;

    if let Ok(path) = env::var(INPUT_ENV_VAR) {
        config.input_path = path;
    }
    if let Some(path) = env::args().nth(1) {
        config.input_path = path;
    }

    Ok(config)
}

fn main() -> ExitCode {
    let config = match resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match batch::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
