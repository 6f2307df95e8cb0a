// ============================================================================
// Calculator Configuration
// Display precision and input limits for a calculator session
// ============================================================================

use crate::numeric::DEFAULT_PRECISION;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest display precision accepted; f64 carries ~15-17 significant digits.
pub const MAX_DISPLAY_PRECISION: u32 = 15;

/// Errors raised while validating a [`CalculatorConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("display precision {0} exceeds the maximum of {max}", max = MAX_DISPLAY_PRECISION)]
    PrecisionTooLarge(u32),

    #[error("input digit limit must be at least 1")]
    ZeroDigitLimit,
}

/// Configuration for a calculator session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Decimal places shown for fractional results
    pub display_precision: u32,

    /// Optional: Maximum digits accepted in one operand
    /// None means unlimited
    pub max_input_digits: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            display_precision: DEFAULT_PRECISION,
            max_input_digits: None,
        }
    }
}

impl CalculatorConfig {
    /// Create a configuration with the given display precision
    pub fn new(display_precision: u32) -> Self {
        Self {
            display_precision,
            ..Self::default()
        }
    }

    /// Builder method: Set maximum input digits
    pub fn with_max_input_digits(mut self, digits: usize) -> Self {
        self.max_input_digits = Some(digits);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(self.display_precision));
        }

        if self.max_input_digits == Some(0) {
            return Err(ConfigError::ZeroDigitLimit);
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Pocket calculator
    /// - Two decimal places
    /// - Eight digit entry
    pub fn pocket_style() -> Self {
        Self::new(DEFAULT_PRECISION).with_max_input_digits(8)
    }

    /// Ten decimal places, unlimited entry
    pub fn high_precision() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.display_precision, 2);
        assert_eq!(config.max_input_digits, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_method() {
        let config = CalculatorConfig::new(4).with_max_input_digits(12);
        assert_eq!(config.display_precision, 4);
        assert_eq!(config.max_input_digits, Some(12));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            CalculatorConfig::new(16).validate(),
            Err(ConfigError::PrecisionTooLarge(16))
        );
        assert_eq!(
            CalculatorConfig::default()
                .with_max_input_digits(0)
                .validate(),
            Err(ConfigError::ZeroDigitLimit)
        );
        assert!(CalculatorConfig::new(MAX_DISPLAY_PRECISION).validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        let pocket = CalculatorConfig::pocket_style();
        assert_eq!(pocket.max_input_digits, Some(8));
        assert!(pocket.validate().is_ok());

        let precise = CalculatorConfig::high_precision();
        assert_eq!(precise.display_precision, 10);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::PrecisionTooLarge(20).to_string(),
            "display precision 20 exceeds the maximum of 15"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = CalculatorConfig::pocket_style();
        let json = serde_json::to_string(&config).unwrap();
        let back: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
