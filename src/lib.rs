// ============================================================================
// Rolling Number Library
// Float-backed currency values and frame-driven rolling counters
// ============================================================================

//! # Rolling Number
//!
//! Currency values with big-number style arithmetic and text output, plus
//! a driver that animates a displayed amount toward a target over time.
//!
//! ## Features
//!
//! - **NumericValue**: one `f64` with a chainable arithmetic, rounding,
//!   comparison and formatting API
//! - **RollingNumber**: per-frame driver with a handle-based ticker and
//!   progress/finish events
//! - **RollingLabel**: text adapter with deferred starts and K/M/B suffixes
//! - **async** feature: tokio frame loop for hosts without one
//!
//! ## Example
//!
//! ```rust
//! use rolling_number::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let handler = Arc::new(RecordingEventHandler::new());
//! let mut roller = RollingNumber::new(RollingConfig::integer_counter(1000), handler.clone());
//!
//! assert!(roller.roll_number(0, 2500, None, false));
//!
//! // Feed frames from the host loop
//! for _ in 0..63 {
//!     roller.update(Duration::from_millis(16));
//! }
//!
//! assert!(!roller.is_rolling());
//! assert_eq!(roller.current().to_format(Some(0), None, None), "2,500");
//! assert_eq!(handler.finished_count(), 1);
//! ```

pub mod domain;
pub mod engine;
pub mod format;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{RollerId, RollerState, RollingConfig, RollingType};
    pub use crate::engine::{
        LabelEvent, LabelFormatter, RollStart, RollingLabel, RollingNumber, TickHandle, Ticker,
    };
    pub use crate::format::{Exponent, RoundMode};
    pub use crate::interfaces::{
        LoggingEventHandler, NoOpEventHandler, RecordingEventHandler, RollingEvent,
        RollingEventHandler,
    };
    pub use crate::numeric::{NumericError, NumericInput, NumericValue, RoundingMode};
}
