// ============================================================================
// Keypad Domain Model
// ============================================================================

use crate::numeric::Operator;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    Operator(Operator),
    Equals,
    /// Reset the whole session
    Clear,
    /// +/- button
    ToggleSign,
    /// Divide the display by 100
    Percent,
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// Returns `None` for characters with no keypad button.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Key::Digit(d as u8)),
            '.' => Some(Key::Point),
            '=' => Some(Key::Equals),
            'C' | 'c' => Some(Key::Clear),
            '~' | '\u{00B1}' => Some(Key::ToggleSign),
            '%' => Some(Key::Percent),
            other => Operator::from_symbol(other).ok().map(Key::Operator),
        }
    }

    /// Label printed on the button.
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Point => ".".to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::Clear => "C".to_string(),
            Key::ToggleSign => "+/-".to_string(),
            Key::Percent => "%".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for c in '0'..='9' {
            let expected = c.to_digit(10).unwrap() as u8;
            assert_eq!(Key::from_char(c), Some(Key::Digit(expected)));
        }
    }

    #[test]
    fn test_operators_and_controls() {
        assert_eq!(Key::from_char('+'), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_char('÷'), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_char('.'), Some(Key::Point));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('±'), Some(Key::ToggleSign));
        assert_eq!(Key::from_char('%'), Some(Key::Percent));
    }

    #[test]
    fn test_unknown_char() {
        assert_eq!(Key::from_char('x'), None);
        assert_eq!(Key::from_char(' '), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Digit(7).label(), "7");
        assert_eq!(Key::Operator(Operator::Multiply).label(), "*");
        assert_eq!(Key::ToggleSign.label(), "+/-");
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
        let uuid = Uuid::new_v4();
        assert_eq!(SessionId::from_uuid(uuid).as_uuid(), &uuid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let keys = [
            Key::Digit(7),
            Key::Operator(Operator::Multiply),
            Key::Point,
            Key::ToggleSign,
        ];
        for key in keys {
            let json = serde_json::to_string(&key).unwrap();
            let back: Key = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }

        let session = SessionId::new();
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(serde_json::from_str::<SessionId>(&json).unwrap(), session);
    }
}
