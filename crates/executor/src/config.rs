use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ExecutorConfig {
    pub buffer_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EvaluatorConfig {
    pub terms: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InteractiveConfig {
    pub terms: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProducerConfig {
    pub batch_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub batch_size: usize,
    pub simulation_interval_ms: u64,
    pub max_value: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub executor: ExecutorConfig,
    pub evaluator: EvaluatorConfig,
    pub interactive: InteractiveConfig,
    pub producer: ProducerConfig,
    pub simulator: SimulatorConfig,
}

/// Loads configuration from a file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("executor")
        .join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .try_parsing(true)
                .separator("_"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
