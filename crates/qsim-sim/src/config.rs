//! Simulator configuration.
//!
//! Values come from, highest precedence first: `QSIM_*` environment
//! variables, a YAML file, then the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use qsim_ir::MAX_QUBITS;

use crate::applicator::EntanglerSemantics;

/// Environment variable holding the RNG seed.
pub const ENV_SEED: &str = "QSIM_SEED";
/// Environment variable holding the entangler semantics.
pub const ENV_SEMANTICS: &str = "QSIM_SEMANTICS";
/// Environment variable holding the qubit limit.
pub const ENV_MAX_QUBITS: &str = "QSIM_MAX_QUBITS";

/// Executor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Seed for the shot sampler. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// How CZ, SWAP and Fredkin are applied.
    pub semantics: EntanglerSemantics,

    /// Widest circuit the executor accepts.
    pub max_qubits: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            semantics: EntanglerSemantics::default(),
            max_qubits: MAX_QUBITS,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml_ng::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Default config file location, `~/.qsim/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qsim").join("config.yaml"))
    }

    /// Load with the full precedence chain and validate.
    ///
    /// An explicit `path` must exist. The default location is used only if
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        let config = base.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `QSIM_*` overrides from the process environment.
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(seed) = lookup(ENV_SEED) {
            let seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{ENV_SEED}='{seed}' is not a u64")))?;
            self.seed = Some(seed);
        }
        if let Some(semantics) = lookup(ENV_SEMANTICS) {
            self.semantics = semantics
                .trim()
                .parse()
                .map_err(|e: String| ConfigError::Invalid(format!("{ENV_SEMANTICS}: {e}")))?;
        }
        if let Some(max) = lookup(ENV_MAX_QUBITS) {
            self.max_qubits = max.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_MAX_QUBITS}='{max}' is not a u32"))
            })?;
        }
        Ok(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(ConfigError::Invalid(format!(
                "max_qubits must be between 1 and {MAX_QUBITS}, got {}",
                self.max_qubits
            )));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The file is not valid YAML for this schema.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value is out of range or malformed.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
