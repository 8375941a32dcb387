// ============================================================================
// Rounding Modes
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding mode enumerants, numbered the way the client passes them around.
///
/// The five `Half*` modes are declared for compatibility but all round half
/// away from zero. Their finer distinctions are not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up = 0,
    /// Toward zero (truncate)
    Down = 1,
    /// Toward +infinity
    Ceil = 2,
    /// Toward -infinity
    Floor = 3,
    #[default]
    HalfUp = 4,
    HalfDown = 5,
    HalfEven = 6,
    HalfCeil = 7,
    HalfFloor = 8,
}

impl RoundingMode {
    /// Map a numeric code to a mode. Unknown codes fall back to `HalfUp`.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => RoundingMode::Up,
            1 => RoundingMode::Down,
            2 => RoundingMode::Ceil,
            3 => RoundingMode::Floor,
            4 => RoundingMode::HalfUp,
            5 => RoundingMode::HalfDown,
            6 => RoundingMode::HalfEven,
            7 => RoundingMode::HalfCeil,
            8 => RoundingMode::HalfFloor,
            _ => RoundingMode::HalfUp,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_half(self) -> bool {
        matches!(
            self,
            RoundingMode::HalfUp
                | RoundingMode::HalfDown
                | RoundingMode::HalfEven
                | RoundingMode::HalfCeil
                | RoundingMode::HalfFloor
        )
    }

    /// Round `value` to `places` decimal places.
    ///
    /// Scales by `10^places`, rounds, and scales back, so it carries the
    /// usual binary floating-point error of that round trip.
    pub fn apply(self, value: f64, places: i32) -> f64 {
        let multiplier = 10f64.powi(places);
        let scaled = value * multiplier;
        match self {
            RoundingMode::Up => {
                if scaled == 0.0 || scaled.is_nan() {
                    value
                } else {
                    scaled.abs().ceil() * value.signum() / multiplier
                }
            },
            RoundingMode::Down => scaled.trunc() / multiplier,
            RoundingMode::Ceil => scaled.ceil() / multiplier,
            RoundingMode::Floor => scaled.floor() / multiplier,
            _ => scaled.round() / multiplier,
        }
    }
}

impl From<u8> for RoundingMode {
    fn from(code: u8) -> Self {
        RoundingMode::from_code(code)
    }
}
