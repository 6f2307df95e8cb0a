// ============================================================================
// Basic Operations
// The four binary operations on f64 operands
// ============================================================================
//
// All four functions are pure and follow IEEE-754 semantics, with one
// exception: `divide` returns 0.0 for a zero divisor (positive or negative
// zero) instead of an infinity or NaN.

use super::errors::{ArithmeticError, ArithmeticResult};

/// Returns `x + y`.
#[inline]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// Returns `x - y`.
#[inline]
pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

/// Returns `x * y`.
#[inline]
pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Returns `x / y`, or `0.0` when `y` is zero.
///
/// A zero result is therefore ambiguous: callers cannot tell a real zero
/// quotient from a masked zero divisor. Use [`checked_divide`] when that
/// distinction matters.
///
/// # Example
/// ```
/// use keypad_calc::numeric::divide;
///
/// assert_eq!(divide(10.0, 2.0), 5.0);
/// assert_eq!(divide(5.0, 0.0), 0.0);
/// ```
#[inline]
pub fn divide(x: f64, y: f64) -> f64 {
    if y != 0.0 {
        x / y
    } else {
        0.0
    }
}

/// Checked division.
///
/// # Errors
/// Returns `DivisionByZero` if `y` is zero.
#[inline]
pub fn checked_divide(x: f64, y: f64) -> ArithmeticResult<f64> {
    if y == 0.0 {
        Err(ArithmeticError::DivisionByZero)
    } else {
        Ok(x / y)
    }
}

/// Parse operand text as shown on a calculator display.
///
/// Accepts anything `f64::from_str` does after trimming, including a
/// dangling point such as `"12."`.
///
/// # Errors
/// Returns `InvalidOperand` for empty or malformed text.
pub fn parse_operand(text: &str) -> ArithmeticResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ArithmeticError::InvalidOperand);
    }
    text.parse().map_err(|_| ArithmeticError::InvalidOperand)
}
