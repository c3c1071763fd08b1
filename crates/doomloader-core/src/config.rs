//! Simulator configuration.
//!
//! Loaded from TOML; every field is optional and falls back to its default.
//!
//! ```toml
//! sample_rate = 48000
//!
//! [parameters]
//! gain = 0.7
//! tone = 0.4
//! ```

use crate::parameter::ParameterSnapshot;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_SAMPLE_RATE: u32 = 8000;
pub const MAX_SAMPLE_RATE: u32 = 384000;

/// Configuration for an amp simulator instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub sample_rate: u32,
    pub parameters: ParameterSnapshot,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            parameters: ParameterSnapshot::default(),
        }
    }
}

impl SimulatorConfig {
    /// Parse and validate a TOML document. Knob values are clamped.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: SimulatorConfig = toml::from_str(contents)?;
        config.parameters = config.parameters.clamped();
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded simulator config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} out of range ({}-{} Hz)",
                self.sample_rate, MIN_SAMPLE_RATE, MAX_SAMPLE_RATE
            )));
        }
        Ok(())
    }
}
