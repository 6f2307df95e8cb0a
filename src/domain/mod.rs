// ============================================================================
// Domain Models Module
// Keypad keys, session identity and configuration
// ============================================================================

pub mod config;
pub mod key;

pub use config::{CalculatorConfig, ConfigError, MAX_DISPLAY_PRECISION};
pub use key::{Key, SessionId};
