// ============================================================================
// Engine Module
// Frame-driven rolling drivers and their display adapter
// ============================================================================

mod rolling_label;
mod rolling_number;
mod ticker;

#[cfg(feature = "async")]
pub mod runtime;

pub use rolling_label::{LabelEvent, LabelEvents, LabelFormatter, RollingLabel, DEFAULT_MAX_LENGTH};
pub use rolling_number::{RollStart, RollingEvents, RollingNumber};
pub use ticker::{TickHandle, Ticker};
