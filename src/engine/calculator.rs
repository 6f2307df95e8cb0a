// ============================================================================
// Calculator
// Keypad-driven session: digit entry, pending operator, chained evaluation
// ============================================================================

use crate::domain::{CalculatorConfig, Key, SessionId};
use crate::interfaces::{CalculatorEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{
    format_plain, format_result, parse_operand, ArithmeticError, ArithmeticResult, Operator,
};
use chrono::Utc;
use std::sync::Arc;

const INITIAL_DISPLAY: &str = "0";

/// A single calculator session.
///
/// The session owns the display text and at most one pending operator.
/// Operators evaluate left to right as they are entered (no precedence), and
/// the raw f64 result of each step is carried forward, so rounding only
/// affects what is shown.
pub struct Calculator {
    /// Identity attached to every emitted event
    session_id: SessionId,

    config: CalculatorConfig,

    /// Text currently shown to the user
    display: String,

    /// Operator waiting for its right-hand operand
    pending: Option<Operator>,

    /// Left-hand operand for the pending operator
    first_operand: f64,

    /// Set after an operator or result: the next digit starts a new operand
    clear_on_next_digit: bool,

    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a session with the default configuration
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self::with_config(CalculatorConfig::default(), event_handler)
    }

    /// Create a session with an already validated configuration.
    ///
    /// Callers outside the crate go through
    /// [`create_from_config`](crate::engine::create_from_config) or
    /// [`CalculatorBuilder`](crate::engine::CalculatorBuilder), which validate first.
    pub(crate) fn with_config(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            session_id: SessionId::new(),
            config,
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            first_operand: 0.0,
            clear_on_next_digit: false,
            event_handler,
        }
    }

    /// Press a key and return the resulting display text
    pub fn press(&mut self, key: Key) -> &str {
        let mut events = Vec::new();

        let accepted = match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::Point => {
                self.enter_point();
                true
            },
            Key::Operator(op) => {
                self.enter_operator(op, &mut events);
                true
            },
            Key::Equals => {
                self.evaluate_pending(&mut events);
                true
            },
            Key::Clear => {
                self.reset();
                events.push(CalculatorEvent::Cleared {
                    session_id: self.session_id,
                    timestamp: Utc::now(),
                });
                true
            },
            Key::ToggleSign => {
                self.toggle_sign();
                true
            },
            Key::Percent => {
                self.display = format_plain(self.current_value() / 100.0);
                true
            },
        };

        if accepted {
            tracing::trace!(key = ?key, display = %self.display, "key pressed");
            events.push(CalculatorEvent::KeyPressed {
                session_id: self.session_id,
                key,
                display: self.display.clone(),
                timestamp: Utc::now(),
            });
        }

        if !events.is_empty() {
            self.event_handler.on_events(events);
        }

        &self.display
    }

    /// Press every key in `input`, skipping whitespace.
    ///
    /// # Errors
    /// Stops at the first character without a keypad button and returns
    /// `UnknownOperator` for it; keys before it stay applied.
    pub fn press_str(&mut self, input: &str) -> ArithmeticResult<&str> {
        for c in input.chars().filter(|c| !c.is_whitespace()) {
            let key = Key::from_char(c).ok_or(ArithmeticError::UnknownOperator(c))?;
            self.press(key);
        }
        Ok(&self.display)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Numeric value of the display; unreadable text counts as 0
    pub fn current_value(&self) -> f64 {
        parse_operand(&self.display).unwrap_or(0.0)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn enter_digit(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }

        let digit = char::from(b'0' + digit);

        if self.clear_on_next_digit || self.display == INITIAL_DISPLAY {
            self.display.clear();
            self.display.push(digit);
        } else {
            if let Some(limit) = self.config.max_input_digits {
                let entered = self.display.chars().filter(char::is_ascii_digit).count();
                if entered >= limit {
                    return false;
                }
            }
            self.display.push(digit);
        }

        self.clear_on_next_digit = false;
        true
    }

    fn enter_point(&mut self) {
        if self.clear_on_next_digit {
            self.display = "0.".to_string();
            self.clear_on_next_digit = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// A second operator pressed before any new digit replaces the pending one
    /// without evaluating anything.
    fn enter_operator(&mut self, op: Operator, events: &mut Vec<CalculatorEvent>) {
        match self.pending {
            None => self.first_operand = self.current_value(),
            // A fresh operand was typed: fold it into the running result
            Some(pending) if !self.clear_on_next_digit => {
                let result = self.apply(pending, self.first_operand, self.current_value(), events);
                self.first_operand = result;
                self.display = format_result(result, self.config.display_precision);
            },
            // Two operators in a row: the later one wins
            Some(_) => {},
        }

        self.pending = Some(op);
        self.clear_on_next_digit = true;
    }

    fn evaluate_pending(&mut self, events: &mut Vec<CalculatorEvent>) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let result = self.apply(pending, self.first_operand, self.current_value(), events);
        self.display = format_result(result, self.config.display_precision);
        self.first_operand = 0.0;
        self.clear_on_next_digit = true;
    }

    fn apply(
        &self,
        op: Operator,
        lhs: f64,
        rhs: f64,
        events: &mut Vec<CalculatorEvent>,
    ) -> f64 {
        if op.masks_zero_divisor(rhs) {
            tracing::debug!(dividend = lhs, "zero divisor, result forced to 0");
            events.push(CalculatorEvent::DivisionByZeroMasked {
                session_id: self.session_id,
                dividend: lhs,
                timestamp: Utc::now(),
            });
        }

        let result = op.apply(lhs, rhs);
        tracing::debug!(%op, lhs, rhs, result, "evaluated");

        events.push(CalculatorEvent::Evaluated {
            session_id: self.session_id,
            operator: op,
            lhs,
            rhs,
            result,
            timestamp: Utc::now(),
        });

        result
    }

    fn toggle_sign(&mut self) {
        if self.display == INITIAL_DISPLAY {
            return;
        }
        match self.display.strip_prefix('-') {
            Some(rest) => self.display = rest.to_string(),
            None => self.display.insert(0, '-'),
        }
    }

    fn reset(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = None;
        self.first_operand = 0.0;
        self.clear_on_next_digit = false;
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Arc::new(NoOpEventHandler))
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("session_id", &self.session_id)
            .field("display", &self.display)
            .field("pending", &self.pending)
            .field("first_operand", &self.first_operand)
            .field("clear_on_next_digit", &self.clear_on_next_digit)
            .finish()
    }
}
