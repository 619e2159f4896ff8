//! Seed-gathering configuration.

use super::blocks::{seed_bits_to_blocks, ENTROPY_BITS_NEEDED};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on a sane entropy requirement. Requests beyond this are a
/// misconfiguration, not a plausible seeding need.
const MAX_ENTROPY_BITS: usize = 65_536;

/// Configuration for gathering seed material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Entropy requirement in bits.
    pub entropy_bits: usize,
    /// Fold the process-wide salt into gathered material.
    pub salt: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            entropy_bits: ENTROPY_BITS_NEEDED,
            salt: true,
        }
    }
}

impl SeedConfig {
    /// Creates a configuration with the given entropy requirement.
    pub fn with_entropy_bits(entropy_bits: usize) -> Self {
        Self {
            entropy_bits,
            ..Default::default()
        }
    }

    /// Returns the number of 32-bit blocks the requirement translates to.
    pub fn blocks_needed(&self) -> usize {
        seed_bits_to_blocks(self.entropy_bits)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entropy_bits == 0 {
            return Err(ConfigError::ZeroEntropyBits);
        }
        if self.entropy_bits > MAX_ENTROPY_BITS {
            return Err(ConfigError::ExcessiveEntropyBits {
                requested: self.entropy_bits,
                max: MAX_ENTROPY_BITS,
            });
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: SeedConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("entropy requirement must be nonzero")]
    ZeroEntropyBits,
    #[error("entropy requirement too large: {requested} bits (max {max})")]
    ExcessiveEntropyBits { requested: usize, max: usize },
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}
