// ============================================================================
// Operator
// The four binary operators as a value that can be stored and applied later
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use super::operations::{add, divide, multiply, subtract};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    /// Zero-guarded: a zero divisor yields 0.0
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Apply the operator to two operands.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => add(lhs, rhs),
            Operator::Subtract => subtract(lhs, rhs),
            Operator::Multiply => multiply(lhs, rhs),
            Operator::Divide => divide(lhs, rhs),
        }
    }

    /// ASCII symbol for the operator.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Look up an operator by its ASCII symbol or keypad glyph.
    ///
    /// # Errors
    /// Returns `UnknownOperator` for any other character.
    pub fn from_symbol(symbol: char) -> ArithmeticResult<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' | '\u{2212}' => Ok(Operator::Subtract),
            '*' | '\u{00D7}' => Ok(Operator::Multiply),
            '/' | '\u{00F7}' => Ok(Operator::Divide),
            other => Err(ArithmeticError::UnknownOperator(other)),
        }
    }

    /// Whether applying this operator to `rhs` hits the zero-divisor guard.
    #[inline]
    pub fn masks_zero_divisor(self, rhs: f64) -> bool {
        self == Operator::Divide && rhs == 0.0
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            (Some(first), Some(_)) => Err(ArithmeticError::UnknownOperator(first)),
            (None, _) => Err(ArithmeticError::InvalidOperand),
        }
    }
}
