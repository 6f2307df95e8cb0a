// ============================================================================
// Logging Setup
// Subscriber installation for binaries, demos and benchmarks
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `keypad_calc` events at
/// `default_level` and above are shown. Returns `false` if a global
/// subscriber was already installed.
pub fn init_logging(default_level: tracing::Level) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keypad_calc={}", default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .is_ok()
}
