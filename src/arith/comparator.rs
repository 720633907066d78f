//! The comparator: picks product, quotient or sum from the ordering of two
//! operands.
//!
//! Branches are checked in a fixed order: `a > b`, then `a < b`, then the
//! remainder. The quotient branch divides as reals and does not guard the
//! divisor beforehand, so `compare(a, 0)` with `a < 0` is an error rather
//! than a silently patched value. Integer products and sums that do not
//! fit the operand type are reported as overflow.

use std::fmt;

use super::{ArithmeticError, Operand};

/// Outcome of [`compare`], tagged with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison<T> {
    /// `a > b`: `a * b`.
    Product(T),
    /// `a < b`: `a / b` as a real number.
    Quotient(f64),
    /// Neither ordered above the other: `a + b`.
    Sum(T),
}

impl<T: Operand> Comparison<T> {
    /// The numeric result widened to `f64`.
    pub fn value(&self) -> f64 {
        match *self {
            Comparison::Product(v) | Comparison::Sum(v) => v.to_f64(),
            Comparison::Quotient(q) => q,
        }
    }

    /// Short name of the branch, used in log output.
    pub fn branch(&self) -> &'static str {
        match self {
            Comparison::Product(_) => "product",
            Comparison::Quotient(_) => "quotient",
            Comparison::Sum(_) => "sum",
        }
    }
}

impl<T: fmt::Display> fmt::Display for Comparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Product(v) | Comparison::Sum(v) => v.fmt(f),
            Comparison::Quotient(q) => q.fmt(f),
        }
    }
}

/// Classify `a` and `b` by order and derive a value from them.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `a < b` and `b` is zero,
/// and [`ArithmeticError::Overflow`] when an integer product or sum does not
/// fit `T`.
pub fn compare<T: Operand>(a: T, b: T) -> Result<Comparison<T>, ArithmeticError> {
    if a > b {
        Ok(Comparison::Product(a.try_mul(b)?))
    } else if a < b {
        if b.is_zero() {
            return Err(ArithmeticError::DivisionByZero {
                dividend: a.to_f64(),
            });
        }
        Ok(Comparison::Quotient(a.to_f64() / b.to_f64()))
    } else {
        Ok(Comparison::Sum(a.try_add(b)?))
    }
}
