// ============================================================================
// Calculator Factory
// Creates calculator sessions with validated configuration
// ============================================================================

use crate::domain::{CalculatorConfig, ConfigError};
use crate::engine::Calculator;
use crate::interfaces::{EventHandler, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator session from configuration
///
/// # Example
/// ```
/// use keypad_calc::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::pocket_style();
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.display(), "0");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, ConfigError> {
    config.validate()?;

    tracing::debug!(
        display_precision = config.display_precision,
        max_input_digits = ?config.max_input_digits,
        "creating calculator session"
    );

    Ok(Calculator::with_config(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculator sessions with a fluent API
///
/// # Example
/// ```
/// use keypad_calc::prelude::*;
/// use std::sync::Arc;
///
/// let mut calc = CalculatorBuilder::new()
///     .display_precision(4)
///     .event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.press_str("1/3=").unwrap(), "0.3333");
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorBuilder {
    /// Create a builder with the default configuration and no-op events
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Set decimal places shown for fractional results
    pub fn display_precision(mut self, precision: u32) -> Self {
        self.config.display_precision = precision;
        self
    }

    /// Limit the digits accepted in one operand
    pub fn max_input_digits(mut self, digits: usize) -> Self {
        self.config.max_input_digits = Some(digits);
        self
    }

    /// Set the event handler
    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Build the calculator session
    pub fn build(self) -> Result<Calculator, ConfigError> {
        create_from_config(self.config, self.event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
