//! Diagnostic logging on stderr.
//!
//! Stdout is reserved for the three result lines, so every event goes to
//! stderr. `RUST_LOG` takes precedence over everything else:
//!
//! ```bash
//! RUST_LOG=debug calcdemo
//! calcdemo -v      # debug
//! calcdemo -vv     # trace
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;
use crate::constants::DEFAULT_LOG_LEVEL;

static INIT: Once = Once::new();

/// Resolve the filter directive from `-v` occurrences and config.
///
/// Verbosity flags win over the configured level.
pub fn directive(config: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => config.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize logging.
///
/// Call once at startup. Safe to call multiple times (only first call takes effect).
pub fn init(config: &LoggingConfig, verbose: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let wanted = directive(config, verbose);
            EnvFilter::try_new(&wanted).unwrap_or_else(|_| {
                eprintln!("Warning: ignoring invalid log level: {wanted}");
                EnvFilter::new(DEFAULT_LOG_LEVEL)
            })
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_level(true);

        // A subscriber may already be installed when embedded in tests.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}
