//! calcdemo: calculator and comparator demonstration.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use calcdemo::config::Config;
use calcdemo::demo::{self, DemoSettings};
use calcdemo::env::Env;
use calcdemo::logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;

fn main() {
    if let Err(err) = run() {
        cli::print_error(&err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let work_dir = std::env::current_dir().context("failed to resolve current directory")?;
    let mut config = Config::load(cli.config.as_deref(), &work_dir, &Env::real())
        .context("failed to load configuration")?;
    cli.apply_to(&mut config);
    config.validate().context("invalid configuration")?;

    logging::init(&config.logging, cli.verbose);
    tracing::debug!(?config, "configuration resolved");

    let settings = DemoSettings::from(&config);
    let mut rng = demo::make_rng(config.draw.seed);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    demo::run(&settings, &mut rng, &mut out).context("demonstration run failed")?;
    Ok(())
}
