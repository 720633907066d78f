//! Arithmetic core: the calculator unit and the order-dependent comparator.
//!
//! Both components are generic over [`Operand`], which covers the
//! primitive integer and float types the demo accepts interchangeably.

pub mod calculator;
pub mod comparator;

use std::fmt;
use std::ops::{Add, Mul, Sub};

use thiserror::Error;

pub use calculator::Calculator;
pub use comparator::{Comparison, compare};

/// Errors raised by arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// The comparator's quotient branch was reached with a zero divisor.
    #[error("division by zero: cannot divide {dividend} by 0")]
    DivisionByZero { dividend: f64 },

    /// An integer result does not fit the operand type.
    #[error("overflow: {lhs} {op} {rhs} does not fit the operand type")]
    Overflow {
        op: char,
        lhs: String,
        rhs: String,
    },
}

impl ArithmeticError {
    fn overflow<T: Operand>(op: char, lhs: T, rhs: T) -> Self {
        ArithmeticError::Overflow {
            op,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }
}

/// A numeric value usable by [`Calculator`] and [`compare`].
pub trait Operand:
    Copy
    + PartialOrd
    + fmt::Display
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Returns `true` for the additive identity (`0`, `0.0` or `-0.0`).
    fn is_zero(self) -> bool;

    /// Widens the value for real-valued division.
    fn to_f64(self) -> f64;

    /// `None` when the sum is not representable. Floats always succeed.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Checked `+`, reporting overflow as an error.
    fn try_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
        self.checked_add(rhs)
            .ok_or_else(|| ArithmeticError::overflow('+', self, rhs))
    }

    /// Checked `-`, reporting overflow as an error.
    fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
        self.checked_sub(rhs)
            .ok_or_else(|| ArithmeticError::overflow('-', self, rhs))
    }

    /// Checked `*`, reporting overflow as an error.
    fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
        self.checked_mul(rhs)
            .ok_or_else(|| ArithmeticError::overflow('*', self, rhs))
    }
}

macro_rules! impl_integer_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn is_zero(self) -> bool {
                    self == 0
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn is_zero(self) -> bool {
                    self == 0.0
                }

                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )*
    };
}

impl_integer_operand!(i32, i64, u32, u64);
impl_float_operand!(f32, f64);
