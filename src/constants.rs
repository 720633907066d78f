//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the built-in demonstration values.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calcdemo";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.calcdemo.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".calcdemo.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "calcdemo";

// ── Built-in demonstration values ───────────────────────────────────

/// Calculator operands used when nothing overrides them.
pub const DEFAULT_X: i64 = 5;
pub const DEFAULT_Y: i64 = 3;

/// Inclusive bounds of the random comparator operands.
pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 10;

/// Log level when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ── Output labels ───────────────────────────────────────────────────

pub const LABEL_ADD: &str = "Add";
pub const LABEL_SUBTRACT: &str = "Subtract";
pub const LABEL_FUNCTION: &str = "Function result";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_X: &str = "CALCDEMO_X";
pub const ENV_Y: &str = "CALCDEMO_Y";
pub const ENV_MIN: &str = "CALCDEMO_MIN";
pub const ENV_MAX: &str = "CALCDEMO_MAX";
pub const ENV_SEED: &str = "CALCDEMO_SEED";
pub const ENV_LOG: &str = "CALCDEMO_LOG";
