// ============================================================================
// Domain Models Module
// Contains configuration and value objects for rolling drivers
// ============================================================================

pub mod config;
pub mod roller;

pub use config::RollingConfig;
pub use roller::{RollerId, RollerState, RollingType};
