// ============================================================================
// Utilities Module
// Helper functions outside the calculation path
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
