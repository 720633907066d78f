//! Clap argument types and config overrides.

use clap::Parser;
use std::path::PathBuf;

use calcdemo::config::Config;

/// Calculator and comparator demonstration.
///
/// Prints the sum and difference of two fixed operands, then the
/// comparator result for two random operands.
#[derive(Parser, Debug, Default)]
#[command(name = calcdemo::constants::APP_NAME, version = calcdemo::constants::VERSION)]
pub struct Cli {
    /// Config file to use instead of `.calcdemo.toml` in the current directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// First calculator operand (default: 5).
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<i64>,

    /// Second calculator operand (default: 3).
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<i64>,

    /// Lower bound of the random operands, inclusive (default: 1).
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Upper bound of the random operands, inclusive (default: 10).
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Seed the random generator for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log to stderr: -v for debug, -vv for trace.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply flags on top of the layered config (CLI has the final say).
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(x) = self.x {
            config.calculator.x = x;
        }
        if let Some(y) = self.y {
            config.calculator.y = y;
        }
        if let Some(min) = self.min {
            config.draw.min = min;
        }
        if let Some(max) = self.max {
            config.draw.max = max;
        }
        if self.seed.is_some() {
            config.draw.seed = self.seed;
        }
    }
}
