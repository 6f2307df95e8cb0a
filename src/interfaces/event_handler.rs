// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator sessions
// ============================================================================

use crate::domain::{Key, SessionId};
use crate::numeric::Operator;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// Key accepted by the session
    KeyPressed {
        session_id: SessionId,
        key: Key,
        display: String,
        timestamp: DateTime<Utc>,
    },

    /// Pending operator applied to two operands
    Evaluated {
        session_id: SessionId,
        operator: Operator,
        #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
        lhs: f64,
        #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
        rhs: f64,
        #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
        result: f64,
        timestamp: DateTime<Utc>,
    },

    /// Divide hit a zero divisor and produced 0
    DivisionByZeroMasked {
        session_id: SessionId,
        #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
        dividend: f64,
        timestamp: DateTime<Utc>,
    },

    /// Session reset with the clear key
    Cleared {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },
}

impl CalculatorEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            CalculatorEvent::KeyPressed { session_id, .. }
            | CalculatorEvent::Evaluated { session_id, .. }
            | CalculatorEvent::DivisionByZeroMasked { session_id, .. }
            | CalculatorEvent::Cleared { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, UI updates, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        match &event {
            CalculatorEvent::DivisionByZeroMasked { dividend, .. } => {
                tracing::info!(dividend = *dividend, "division by zero masked as 0");
            },
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}

/// Collects every event it receives; handy for tests and audit trails.
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculatorEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn cleared(session_id: SessionId) -> CalculatorEvent {
        CalculatorEvent::Cleared {
            session_id,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(cleared(SessionId::new()));
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        let session = SessionId::new();
        handler.on_events(vec![
            CalculatorEvent::DivisionByZeroMasked {
                session_id: session,
                dividend: 9.0,
                timestamp: Utc::now(),
            },
            cleared(session),
        ]);
        // Should not panic
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        let session = SessionId::new();
        handler.on_event(cleared(session));
        handler.on_events(vec![cleared(session), cleared(session)]);

        assert_eq!(handler.len(), 3);
        assert!(handler.events().iter().all(|e| e.session_id() == session));

        handler.clear();
        assert!(handler.is_empty());
    }

    #[test]
    fn test_recording_handler_shared_across_threads() {
        let handler = Arc::new(RecordingEventHandler::new());

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handler = Arc::clone(&handler);
                thread::spawn(move || {
                    let session = SessionId::new();
                    for _ in 0..25 {
                        handler.on_event(cleared(session));
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(handler.len(), 100);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use crate::engine::Calculator;

        fn round_trip(event: &CalculatorEvent) -> (String, CalculatorEvent) {
            let json = serde_json::to_string(event).unwrap();
            let back: CalculatorEvent = serde_json::from_str(&json).unwrap();
            (json, back)
        }

        #[test]
        fn test_every_variant_round_trips() {
            let session_id = SessionId::new();
            let events = vec![
                CalculatorEvent::KeyPressed {
                    session_id,
                    key: Key::Operator(Operator::Divide),
                    display: "12".to_string(),
                    timestamp: Utc::now(),
                },
                CalculatorEvent::Evaluated {
                    session_id,
                    operator: Operator::Multiply,
                    lhs: 6.0,
                    rhs: 7.0,
                    result: 42.0,
                    timestamp: Utc::now(),
                },
                CalculatorEvent::DivisionByZeroMasked {
                    session_id,
                    dividend: -2.5,
                    timestamp: Utc::now(),
                },
                cleared(session_id),
            ];

            for event in &events {
                let (_, back) = round_trip(event);
                assert_eq!(&back, event);
            }
        }

        #[test]
        fn test_non_finite_operands_round_trip() {
            let event = CalculatorEvent::Evaluated {
                session_id: SessionId::new(),
                operator: Operator::Subtract,
                lhs: f64::INFINITY,
                rhs: f64::INFINITY,
                result: f64::NAN,
                timestamp: Utc::now(),
            };

            let (json, back) = round_trip(&event);
            assert!(json.contains(r#""lhs":"Infinity""#));
            assert!(json.contains(r#""result":"NaN""#));

            match back {
                CalculatorEvent::Evaluated {
                    lhs, rhs, result, ..
                } => {
                    assert_eq!(lhs, f64::INFINITY);
                    assert_eq!(rhs, f64::INFINITY);
                    assert!(result.is_nan());
                },
                other => panic!("unexpected event: {:?}", other),
            }
        }

        #[test]
        fn test_overflowing_session_events_round_trip() {
            let handler = Arc::new(RecordingEventHandler::new());
            let mut calc = Calculator::new(handler.clone());
            let nines = "9".repeat(309);

            calc.press_str(&format!("{nines}*9-{nines}*9=")).unwrap();
            assert_eq!(calc.display(), "NaN");

            let events = handler.events();
            assert!(events
                .iter()
                .any(|e| matches!(e, CalculatorEvent::Evaluated { result, .. } if result.is_nan())));

            for event in &events {
                let (json, back) = round_trip(event);
                assert!(!json.contains("null"));
                assert_eq!(serde_json::to_string(&back).unwrap(), json);
            }
        }
    }
}
