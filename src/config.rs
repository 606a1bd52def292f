use crate::constants::{DEFAULT_WORKERS, GENESIS_SEED};
use crate::error::{ChainError, Result};
use crate::render::OutputFormat;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub seed: u8,
    pub workers: usize,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: GENESIS_SEED,
            workers: DEFAULT_WORKERS,
            format: OutputFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Checks the values and returns the parsed log level.
    pub fn validate(&self) -> Result<LevelFilter> {
        if self.workers == 0 {
            return Err(ChainError::InvalidConfig {
                message: "workers must be at least 1".to_string(),
            });
        }
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ChainError::InvalidConfig {
                message: format!("unknown log level {:?}", self.log_level),
            })
    }
}

/// Reads a YAML config file. Missing keys fall back to the defaults.
pub fn load_config(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(contents)?)
}
