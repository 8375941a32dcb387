// ============================================================================
// Utilities Module
// Subscriber setup for hosts that want log output
// ============================================================================

pub mod logging;

pub use logging::init_logging;
