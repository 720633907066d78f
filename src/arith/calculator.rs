//! The calculator unit: two immutable operands with addition and subtraction.

use super::{ArithmeticError, Operand};

/// Holds a pair of operands fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator<T> {
    x: T,
    y: T,
}

impl<T: Operand> Calculator<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Returns `x + y`, or [`ArithmeticError::Overflow`] when an integer
    /// sum does not fit `T`.
    pub fn add(&self) -> Result<T, ArithmeticError> {
        self.x.try_add(self.y)
    }

    /// Returns `x - y`, with the same overflow contract as [`Calculator::add`].
    pub fn subtract(&self) -> Result<T, ArithmeticError> {
        self.x.try_sub(self.y)
    }
}
