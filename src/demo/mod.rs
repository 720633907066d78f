//! The entry routine: one end-to-end demonstration run.
//!
//! Writes exactly three `<Label>: <value>` lines to the supplied writer.
//! The random source is injected so callers (and tests) decide whether
//! operands come from entropy, a seed, or a fixed mock generator.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, warn};

use crate::arith::{ArithmeticError, Calculator, Comparison, compare};
use crate::config::Config;
use crate::constants::{LABEL_ADD, LABEL_FUNCTION, LABEL_SUBTRACT};

/// Errors that abort a demonstration run.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Inputs for one run, resolved from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSettings {
    pub x: i64,
    pub y: i64,
    pub min: i64,
    pub max: i64,
}

impl DemoSettings {
    /// Whether a draw can produce `a < 0, b == 0`, the comparator's
    /// division-by-zero input.
    pub fn can_divide_by_zero(&self) -> bool {
        self.min < 0 && self.max >= 0
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for DemoSettings {
    fn from(config: &Config) -> Self {
        Self {
            x: config.calculator.x,
            y: config.calculator.y,
            min: config.draw.min,
            max: config.draw.max,
        }
    }
}

/// Everything a run computed, for callers that want more than the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoReport {
    pub sum: i64,
    pub difference: i64,
    pub a: i64,
    pub b: i64,
    pub outcome: Comparison<i64>,
}

/// Build the generator the binary uses: seeded when asked, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw two independent operands uniformly from `[min, max]`.
///
/// `min <= max` must hold; [`Config::validate`] enforces it for loaded configs.
pub fn draw_operands<R: Rng>(rng: &mut R, min: i64, max: i64) -> (i64, i64) {
    let a = rng.gen_range(min..=max);
    let b = rng.gen_range(min..=max);
    (a, b)
}

/// Run the demonstration and write its three result lines to `out`.
///
/// # Errors
///
/// [`DemoError::Arithmetic`] if an integer result overflows or the drawn
/// operands hit the comparator's division by zero, [`DemoError::Output`] if
/// `out` fails. Lines computed before the failure have already been written.
pub fn run<R: Rng, W: Write>(
    settings: &DemoSettings,
    rng: &mut R,
    out: &mut W,
) -> Result<DemoReport, DemoError> {
    let calc = Calculator::new(settings.x, settings.y);
    debug!(x = calc.x(), y = calc.y(), "calculator constructed");

    let sum = calc.add()?;
    writeln!(out, "{LABEL_ADD}: {sum}")?;
    let difference = calc.subtract()?;
    writeln!(out, "{LABEL_SUBTRACT}: {difference}")?;

    if settings.can_divide_by_zero() {
        warn!(
            min = settings.min,
            max = settings.max,
            "draw range allows a zero divisor with a negative dividend"
        );
    }

    let (a, b) = draw_operands(rng, settings.min, settings.max);
    debug!(a, b, "operands drawn");

    let outcome = compare(a, b)?;
    debug!(branch = outcome.branch(), "comparison complete");
    writeln!(out, "{LABEL_FUNCTION}: {outcome}")?;
    out.flush()?;

    Ok(DemoReport {
        sum,
        difference,
        a,
        b,
        outcome,
    })
}
