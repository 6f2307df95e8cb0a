// ============================================================================
// Numeric Errors
// Error types for the arithmetic layer and operand parsing
// ============================================================================

use thiserror::Error;

/// Errors that can occur in the opt-in checked arithmetic paths.
///
/// The plain [`divide`](super::divide) never returns one of these; it masks a
/// zero divisor as `0.0` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Symbol is not one of the four supported operators
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),

    /// Operand text could not be read as a number
    #[error("invalid operand: could not parse value")]
    InvalidOperand,
}

/// Result type alias for numeric operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            ArithmeticError::UnknownOperator('^').to_string(),
            "unknown operator: '^'"
        );
        assert_eq!(
            ArithmeticError::InvalidOperand.to_string(),
            "invalid operand: could not parse value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ArithmeticError::UnknownOperator('%'),
            ArithmeticError::UnknownOperator('%')
        );
        assert_ne!(
            ArithmeticError::DivisionByZero,
            ArithmeticError::InvalidOperand
        );
    }
}
