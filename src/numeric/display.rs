// ============================================================================
// Result Display
// Turns f64 results into calculator display text
// ============================================================================

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Default number of decimal places shown for fractional results.
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest magnitude printed through the integer fast path.
const INTEGER_LIMIT: f64 = i32::MAX as f64;

/// Format a computed result for the display.
///
/// Whole numbers print without a fractional part. Anything else is rounded
/// half away from zero to `precision` places, then trailing zeros and a
/// dangling point are stripped.
///
/// # Example
/// ```
/// use keypad_calc::numeric::format_result;
///
/// assert_eq!(format_result(5.0, 2), "5");
/// assert_eq!(format_result(1.0 / 3.0, 2), "0.33");
/// assert_eq!(format_result(2.5, 2), "2.5");
/// ```
pub fn format_result(value: f64, precision: u32) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }

    if value.fract() == 0.0 && value.abs() <= INTEGER_LIMIT {
        return format!("{}", value as i64);
    }

    match Decimal::from_f64(value) {
        Some(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                "0".to_string()
            } else {
                rounded.normalize().to_string()
            }
        },
        // Beyond Decimal's range (~7.9e28), fall back to fixed notation
        None => trim_fraction(format!("{:.*}", precision as usize, value)),
    }
}

/// Format a value with its shortest round-trip representation.
///
/// Unlike [`format_result`] no rounding takes place, so `0.055` stays
/// `0.055`. Whole numbers drop the `.0`.
pub fn format_plain(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

pub(super) fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
