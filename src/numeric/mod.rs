// ============================================================================
// Numeric Module
// Floating-point arithmetic for the calculator
// ============================================================================
//
// This module provides:
// - add / subtract / multiply / divide: the four f64 operations
// - checked_divide: divide with an explicit DivisionByZero error
// - Operator: a storable, applicable binary operator
// - format_result / format_plain: display text for results
// - ArithmeticError: error type for the checked and parsing paths
// - serde_float: JSON-safe encoding for NaN/Infinity (serde feature)
//
// Design principles:
// - Native IEEE-754 semantics everywhere except the zero divisor
// - `divide` never signals: a zero divisor yields 0.0
// - No panics

mod display;
mod errors;
mod operations;
mod operator;

#[cfg(feature = "serde")]
pub(crate) mod serde_float;

pub use display::{format_plain, format_result, DEFAULT_PRECISION};
pub use errors::{ArithmeticError, ArithmeticResult};
pub use operations::{add, checked_divide, divide, multiply, parse_operand, subtract};
pub use operator::Operator;
