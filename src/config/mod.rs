//! Configuration loading and layering.
//!
//! Handles `.calcdemo.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{
    CalculatorConfig, Config, ConfigError, DrawConfig, LoggingConfig, PartialCalculator,
    PartialConfig, PartialDraw, PartialLogging,
};
