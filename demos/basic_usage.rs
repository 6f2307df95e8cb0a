// ============================================================================
// Basic Usage Example
// ============================================================================

use keypad_calc::numeric::{add, checked_divide, divide, multiply, subtract};
use keypad_calc::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    let _ = keypad_calc::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Arithmetic ===\n");
    println!("add(2, 3)       = {}", add(2.0, 3.0));
    println!("subtract(10, 4) = {}", subtract(10.0, 4.0));
    println!("multiply(3, 7)  = {}", multiply(3.0, 7.0));
    println!("divide(10, 2)   = {}", divide(10.0, 2.0));
    println!("divide(5, 0)    = {}", divide(5.0, 0.0));

    match checked_divide(5.0, 0.0) {
        Ok(value) => println!("checked_divide(5, 0) = {}", value),
        Err(e) => println!("checked_divide(5, 0) failed: {}", e),
    }

    println!("\n=== Keypad Session ===\n");
    let recorder = Arc::new(RecordingEventHandler::new());
    let mut calc = CalculatorBuilder::from_config(CalculatorConfig::pocket_style())
        .event_handler(recorder.clone())
        .build()
        .expect("pocket preset is valid");

    for input in ["12+30=", "C", "7*6-2=", "C", "1/3=", "C", "9/0="] {
        match calc.press_str(input) {
            Ok(display) => println!("  {:<8} -> {}", input, display),
            Err(e) => println!("  {:<8} -> error: {}", input, e),
        }
    }

    println!("\nEvents recorded: {}", recorder.len());
    for event in recorder.events() {
        match event {
            CalculatorEvent::Evaluated {
                operator,
                lhs,
                rhs,
                result,
                ..
            } => println!("  {} {} {} = {}", lhs, operator, rhs, result),
            CalculatorEvent::DivisionByZeroMasked { dividend, .. } => {
                println!("  {} / 0 masked as 0", dividend)
            },
            _ => {},
        }
    }
}
