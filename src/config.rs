//! Tunable engine parameters, optionally read from a TOML file

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde::Deserialize;

use std::fs;
use std::path::Path;

use crate::strategies::{alphabeta, minimax, negamax};

/// File looked up in the working directory by [`EngineConfig::load_or_default`]
pub const CONFIG_PATH: &str = "connect4.toml";

/// Environment variable overriding [`CONFIG_PATH`]
pub const CONFIG_ENV_VAR: &str = "CONNECT4_CONFIG";

/// Search depths per strategy and pacing of the terminal game
///
/// Every field is optional in the file and defaults to the values of
/// [`EngineConfig::default`].
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub minimax_depth: usize,
    pub alpha_beta_depth: usize,
    pub negamax_depth: usize,

    /// Pause before the computer plays, in milliseconds
    pub move_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimax_depth: minimax::DEFAULT_DEPTH,
            alpha_beta_depth: alphabeta::DEFAULT_DEPTH,
            negamax_depth: negamax::DEFAULT_DEPTH,
            move_delay_ms: 500,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse engine config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
    }

    /// Reads the file named by `CONNECT4_CONFIG`, or `connect4.toml`
    ///
    /// A missing file silently gives the defaults, a broken one is reported
    /// and also gives the defaults.
    pub fn load_or_default() -> Self {
        let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded engine config from {}", path);
                config
            }
            Err(err) => {
                warn!("{:#}, using defaults", err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, depth) in [
            ("minimax_depth", self.minimax_depth),
            ("alpha_beta_depth", self.alpha_beta_depth),
            ("negamax_depth", self.negamax_depth),
        ] {
            if depth == 0 {
                return Err(anyhow!("{} must be at least 1", name));
            }
        }
        Ok(())
    }
}
