// ============================================================================
// Keypad Calculator Library
// Floating-point arithmetic and a keypad-driven calculator session
// ============================================================================

//! # Keypad Calc
//!
//! Four binary operations on `f64` and a calculator session built on them.
//!
//! ## Features
//!
//! - **Plain arithmetic**: `add`, `subtract`, `multiply`, `divide`
//! - **Zero-guarded division**: `divide(x, 0.0)` returns `0.0`; `checked_divide`
//!   reports the zero divisor instead
//! - **Keypad sessions**: digit entry, pending operator, left-to-right chaining
//! - **Events** for every key, evaluation and masked division by zero
//!
//! ## Example
//!
//! ```rust
//! use keypad_calc::numeric::{add, divide};
//! use keypad_calc::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(add(2.0, 3.0), 5.0);
//! assert_eq!(divide(5.0, 0.0), 0.0);
//!
//! let mut calc = Calculator::new(Arc::new(NoOpEventHandler));
//! calc.press(Key::Digit(7));
//! calc.press(Key::Operator(Operator::Multiply));
//! calc.press(Key::Digit(6));
//! assert_eq!(calc.press(Key::Equals), "42");
//!
//! assert_eq!(calc.press_str("C 1/3=").unwrap(), "0.33");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, ConfigError, Key, SessionId};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{ArithmeticError, ArithmeticResult, Operator};
}
