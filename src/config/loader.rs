//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `--config <path>` or `.calcdemo.toml` in the working directory
//! 4. `~/.config/calcdemo/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_LOG_LEVEL, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_X,
    DEFAULT_Y, ENV_LOG, ENV_MAX, ENV_MIN, ENV_SEED, ENV_X, ENV_Y,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid draw range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: i64, max: i64 },
}

/// Top-level configuration, fully resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub calculator: CalculatorConfig,
    pub draw: DrawConfig,
    pub logging: LoggingConfig,
}

/// Fixed operands handed to the calculator unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub x: i64,
    pub y: i64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            x: DEFAULT_X,
            y: DEFAULT_Y,
        }
    }
}

/// Inclusive range and optional seed for the comparator operands.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    pub min: i64,
    pub max: i64,
    pub seed: Option<u64>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

/// Log verbosity when neither `RUST_LOG` nor `-v` is given.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// The keys one config file actually sets.
///
/// Layers merge key by key, so a file that restates a built-in default
/// still overrides a lower layer that changed it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub calculator: PartialCalculator,
    pub draw: PartialDraw,
    pub logging: PartialLogging,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialCalculator {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialDraw {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialLogging {
    pub level: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then either `explicit` (which must exist)
    /// or `.calcdemo.toml` under `work_dir`, then applies environment
    /// variable overrides.
    pub fn load(explicit: Option<&Path>, work_dir: &Path, env: &Env) -> Result<Self, ConfigError> {
        Self::load_from(Self::global_config_path().as_deref(), explicit, work_dir, env)
    }

    /// [`Config::load`] with the global config location supplied by the caller.
    pub fn load_from(
        global: Option<&Path>,
        explicit: Option<&Path>,
        work_dir: &Path,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                config.merge(Self::load_file(global_path)?);
            }
        }

        // Layer 3: explicit or working-directory config
        match explicit {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                let local_path = work_dir.join(CONFIG_FILENAME);
                if local_path.exists() {
                    config.merge(Self::load_file(&local_path)?);
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load the keys set by a specific file.
    pub fn load_file(path: &Path) -> Result<PartialConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check invariants that only hold once every layer has been applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw.min > self.draw.max {
            return Err(ConfigError::InvalidRange {
                min: self.draw.min,
                max: self.draw.max,
            });
        }
        Ok(())
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge a higher-priority layer into this one: every key it sets wins.
    fn merge(&mut self, other: PartialConfig) {
        if let Some(x) = other.calculator.x {
            self.calculator.x = x;
        }
        if let Some(y) = other.calculator.y {
            self.calculator.y = y;
        }
        if let Some(min) = other.draw.min {
            self.draw.min = min;
        }
        if let Some(max) = other.draw.max {
            self.draw.max = max;
        }
        if other.draw.seed.is_some() {
            self.draw.seed = other.draw.seed;
        }
        if let Some(level) = other.logging.level {
            self.logging.level = level;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(x) = env_override(env, ENV_X) {
            self.calculator.x = x;
        }
        if let Some(y) = env_override(env, ENV_Y) {
            self.calculator.y = y;
        }
        if let Some(min) = env_override(env, ENV_MIN) {
            self.draw.min = min;
        }
        if let Some(max) = env_override(env, ENV_MAX) {
            self.draw.max = max;
        }
        if let Some(seed) = env_override(env, ENV_SEED) {
            self.draw.seed = Some(seed);
        }
        if let Some(level) = env.var(ENV_LOG) {
            self.logging.level = level;
        }
    }
}

/// Parse `name` from the environment, warning about and skipping garbage.
fn env_override<T: std::str::FromStr>(env: &Env, name: &str) -> Option<T> {
    match env.parsed::<T>(name)? {
        Ok(val) => Some(val),
        Err(raw) => {
            eprintln!("Warning: ignoring invalid {name} value: {raw}");
            None
        }
    }
}
